/// Curve parameters & SEC1 compressed point encoding
use k256::elliptic_curve::sec1::{FromEncodedPoint, ToEncodedPoint};
use k256::{AffinePoint, EncodedPoint};

use crate::error::Error;

/// All participants must run over the same curve; mixing curves is a fatal
/// misconfiguration, not a recoverable error.
pub const CURVE_ID: &str = "secp256k1";

/// Parity tag byte plus the 32-byte x-coordinate.
pub const POINT_COMPRESSED_LEN: usize = 33;

const TAG_EVEN_Y: u8 = 0x02;
const TAG_ODD_Y: u8 = 0x03;

/// Compressed SEC1 encoding of a point. The identity has no affine
/// encoding; callers pass real public keys only.
pub fn encode_point(point: &AffinePoint) -> [u8; POINT_COMPRESSED_LEN] {
    let encoded = point.to_encoded_point(true);
    let mut bytes = [0u8; POINT_COMPRESSED_LEN];
    bytes.copy_from_slice(encoded.as_bytes());
    bytes
}

/// Inverse of [`encode_point`]. Rejects anything that is not exactly a
/// 33-byte compressed encoding of a point on the curve; accepting
/// unvalidated input would open the door to invalid-curve attacks.
pub fn decode_point(data: &[u8]) -> Result<AffinePoint, Error> {
    if data.len() != POINT_COMPRESSED_LEN {
        return Err(Error::InvalidEncoding);
    }
    if data[0] != TAG_EVEN_Y && data[0] != TAG_ODD_Y {
        return Err(Error::InvalidEncoding);
    }
    let encoded = EncodedPoint::from_bytes(data).map_err(|_| Error::InvalidEncoding)?;
    AffinePoint::from_encoded_point(&encoded)
        .into_option()
        .ok_or(Error::InvalidEncoding)
}
