//! Primitives shared by all analysis kernels.

mod sample_view;

pub use sample_view::SampleView;
