pub mod f64;
pub mod traits;
pub mod u8;

pub use self::f64::ImageF64;
pub use self::traits::{ImageView, Rows};
pub use self::u8::ImageU8;
