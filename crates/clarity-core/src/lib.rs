pub mod compare;
pub mod consts;
pub mod error;
pub mod io;
pub mod luminance;
pub mod pipeline;
pub mod quality;
