//! `expand_message_xmd` over SHA-256 (RFC 9380 §5.3.1).

use sha2::{Digest, Sha256};

/// Salt when the DST is too long.
const OVERSIZE_DST_SALT: &[u8] = b"H2C-OVERSIZE-DST-";

/// Maximum domain separation tag length.
const MAX_DST_LEN: usize = 255;

/// SHA-256 block size in bytes; determines the `Z_pad` prefix.
const BLOCK_SIZE: usize = 64;

/// SHA-256 output size in bytes.
const DIGEST_SIZE: usize = 32;

/// Expands `msg` with the domain separation tag `dst` to `out.len()` uniform
/// bytes.
///
/// DSTs longer than 255 bytes are shortened to
/// `SHA256("H2C-OVERSIZE-DST-" || dst)` as the RFC prescribes.
///
/// # Panics
///
/// Empty DSTs and requests for more than 65535 bytes are contract
/// violations, and panic.
pub(crate) fn expand_message_xmd(msg: &[u8], dst: &[u8], out: &mut [u8]) {
    assert!(!dst.is_empty(), "zero-length domain separation tag");

    let len_in_bytes = out.len();
    assert!(
        (1..=u16::MAX as usize).contains(&len_in_bytes),
        "requested expansion length out of range"
    );

    let ell = len_in_bytes.div_ceil(DIGEST_SIZE);
    assert!(ell <= 255, "requested expansion length out of range");

    let hashed_dst;
    let dst = if dst.len() > MAX_DST_LEN {
        hashed_dst = Sha256::new()
            .chain_update(OVERSIZE_DST_SALT)
            .chain_update(dst)
            .finalize();
        &hashed_dst[..]
    } else {
        dst
    };
    let dst_len = [dst.len() as u8];

    // b_0 = H(Z_pad || msg || l_i_b_str || 0x00 || DST')
    let b0 = Sha256::new()
        .chain_update([0u8; BLOCK_SIZE])
        .chain_update(msg)
        .chain_update((len_in_bytes as u16).to_be_bytes())
        .chain_update([0u8])
        .chain_update(dst)
        .chain_update(dst_len)
        .finalize();

    // b_1 = H(b_0 || 0x01 || DST')
    let mut bi = Sha256::new()
        .chain_update(b0)
        .chain_update([1u8])
        .chain_update(dst)
        .chain_update(dst_len)
        .finalize();

    for (i, chunk) in out.chunks_mut(DIGEST_SIZE).enumerate() {
        if i > 0 {
            // b_i = H((b_0 ^ b_{i-1}) || i || DST')
            let mut xored = [0u8; DIGEST_SIZE];
            for (x, (b, prev)) in xored.iter_mut().zip(b0.iter().zip(bi.iter())) {
                *x = b ^ prev;
            }

            bi = Sha256::new()
                .chain_update(xored)
                .chain_update([(i + 1) as u8])
                .chain_update(dst)
                .chain_update(dst_len)
                .finalize();
        }

        chunk.copy_from_slice(&bi[..chunk.len()]);
    }
}

#[cfg(test)]
mod tests {
    use super::expand_message_xmd;
    use hex_literal::hex;

    // RFC 9380 K.1, expand_message_xmd(SHA-256) with
    // DST = "QUUX-V01-CS02-with-expander-SHA256-128"
    const DST: &[u8] = b"QUUX-V01-CS02-with-expander-SHA256-128";

    #[test]
    fn short_outputs() {
        let mut out = [0u8; 32];

        expand_message_xmd(b"", DST, &mut out);
        assert_eq!(
            out,
            hex!("68a985b87eb6b46952128911f2a4412bbc302a9d759667f87f7a21d803f07235")
        );

        expand_message_xmd(b"abc", DST, &mut out);
        assert_eq!(
            out,
            hex!("d8ccab23b5985ccea865c6c97b6e5b8350e794e603b4b97902f53a8a0d605615")
        );

        expand_message_xmd(b"abcdef0123456789", DST, &mut out);
        assert_eq!(
            out,
            hex!("eff31487c770a893cfb36f912fbfcbff40d5661771ca4b2cb4eafe524333f5c1")
        );
    }

    #[test]
    fn long_outputs() {
        let mut out = [0u8; 128];

        expand_message_xmd(b"", DST, &mut out);
        assert_eq!(
            out[..],
            hex!(
                "af84c27ccfd45d41914fdff5df25293e221afc53d8ad2ac06d5e3e29485dadbe
                 e0d121587713a3e0dd4d5e69e93eb7cd4f5df4cd103e188cf60cb02edc3edf18
                 eda8576c412b18ffb658e3dd6ec849469b979d444cf7b26911a08e63cf31f9dc
                 c541708d3491184472c2c29bb749d4286b004ceb5ee6b9a7fa5b646c993f0ced"
            )[..]
        );

        expand_message_xmd(b"q128_qqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqq", DST, &mut out);
        assert_eq!(
            out[..],
            hex!(
                "80be107d0884f0d881bb460322f0443d38bd222db8bd0b0a5312a6fedb49c1bb
                 d88fd75d8b9a09486c60123dfa1d73c1cc3169761b17476d3c6b7cbbd727acd0
                 e2c942f4dd96ae3da5de368d26b32286e32de7e5a8cb2949f866a0b80c58116b
                 29fa7fabb3ea7d520ee603e0c25bcaf0b9a5e92ec6a1fe4e0391d1cdbce8c68a"
            )[..]
        );
    }

    #[test]
    fn oversize_dst_is_hashed() {
        // RFC 9380 K.2: DST = "QUUX-V01-CS02-with-expander-SHA256-128-long-DST-111111..."
        // (total 256 bytes), reduced to H("H2C-OVERSIZE-DST-" || dst).
        let mut long_dst = [0x31u8; 256];
        long_dst[..39].copy_from_slice(b"QUUX-V01-CS02-with-expander-SHA256-128-");

        let mut out = [0u8; 32];
        expand_message_xmd(b"", &long_dst, &mut out);
        assert_eq!(
            out,
            hex!("6ac94680aea05bc9e326b200fe73b5d8dbd34bca4d185524f702bc30d557d32a")
        );
    }

    #[test]
    #[should_panic(expected = "zero-length domain separation tag")]
    fn empty_dst_panics() {
        let mut out = [0u8; 32];
        expand_message_xmd(b"msg", b"", &mut out);
    }
}
