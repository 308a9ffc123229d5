/// Packed module grid
pub mod matrix;
/// Symbol parameters and the encoded result
pub mod qr_code;

pub use matrix::ModuleMatrix;
pub use qr_code::{ECLevel, MaskPattern, Mode, QRCode, Version};
