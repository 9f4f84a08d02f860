/// Errors returned while turning a payload into ASCII art.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Requested QR version is outside 1..=40.
    #[error("invalid QR version {0}, expected 1 to 40")]
    InvalidVersion(i16),
    /// Requested border is wider than the renderer allows.
    #[error("border of {0} modules is too wide, expected at most {max}", max = crate::helper::MAX_BORDER)]
    BorderTooLarge(u32),
    /// The encoder rejected the payload, e.g. it does not fit the requested version.
    #[error("QR encoding failed: {0}")]
    Encode(#[from] qrcode::types::QrError),
}

pub type Result<T> = std::result::Result<T, Error>;
