//! Human-readable byte-size parsing (`"30MiB"`, `"1.5G"`, `"1048576"`).

/// Parse a human-readable byte size into a byte count.
///
/// Accepts a plain byte count, binary suffixes (`KiB`/`MiB`/`GiB`/`TiB`,
/// powers of 1024) and decimal suffixes (`K`/`KB`, `M`/`MB`, `G`/`GB`,
/// `T`/`TB`, powers of 1000). Suffix matching is case-insensitive and
/// whitespace between number and suffix is tolerated. The mantissa may be
/// fractional (`"1.5GiB"`).
///
/// Returns `None` for anything else; callers treat `None` as zero.
pub fn parse_byte_size(s: &str) -> Option<u64> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    let boundary = s
        .find(|c: char| !c.is_ascii_digit() && c != '.')
        .unwrap_or(s.len());
    let (mantissa, suffix) = s.split_at(boundary);

    let multiplier: u64 = match suffix.trim().to_ascii_lowercase().as_str() {
        "" | "b" => 1,
        "k" | "kb" => 1_000,
        "m" | "mb" => 1_000_000,
        "g" | "gb" => 1_000_000_000,
        "t" | "tb" => 1_000_000_000_000,
        "kib" => 1 << 10,
        "mib" => 1 << 20,
        "gib" => 1 << 30,
        "tib" => 1 << 40,
        _ => return None,
    };

    if mantissa.contains('.') {
        // Fractional mantissa goes through f64; overflow checked before cast.
        let value: f64 = mantissa.parse().ok()?;
        let bytes = value * multiplier as f64;
        if !bytes.is_finite() || bytes < 0.0 || bytes >= u64::MAX as f64 {
            return None;
        }
        Some(bytes as u64)
    } else {
        let value: u64 = mantissa.parse().ok()?;
        value.checked_mul(multiplier)
    }
}
