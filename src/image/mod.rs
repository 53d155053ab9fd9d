pub mod f64;
pub mod gray;
pub mod io;
pub mod mask;
pub mod traits;

pub use self::f64::ImageF64;
pub use self::gray::to_grayscale;
pub use self::mask::EdgeMask;
pub use self::traits::{ImageView, Rows};
