pub mod animator;
pub mod app;
pub mod curve;
pub mod error;
pub mod sampler;
pub mod spirograph;
pub mod surface;

pub use animator::SpiroAnimator;
pub use curve::CurveParams;
pub use error::ParamError;
pub use sampler::{ParameterSampler, SamplerRanges};
pub use spirograph::Spirograph;
pub use surface::{MeshSurface, PathId, Surface};
