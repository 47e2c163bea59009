//! 8-bit fixed-point helpers shared by the fade engine, the compositor
//! and the brightness stage.

/// Scale an 8-bit value by a factor (0-255 = 0.0-1.0)
///
/// Uses integer math for efficiency on embedded systems. Cheaper than
/// [`scale8_floor`] but rounds slightly up for mid-range factors.
#[inline]
#[allow(clippy::cast_lossless, clippy::cast_possible_truncation)]
pub const fn scale8(value: u8, scale: u8) -> u8 {
    ((value as u16 * (1 + scale as u16)) >> 8) as u8
}

/// Scale an 8-bit value by `scale / 255`, rounding down
///
/// `scale == 0` yields 0 and `scale == 255` yields `value` unchanged.
#[inline]
#[allow(clippy::cast_lossless, clippy::cast_possible_truncation)]
pub const fn scale8_floor(value: u8, scale: u8) -> u8 {
    (value as u16 * scale as u16 / 255) as u8
}

/// Multiply two 8-bit values treating both as fractions of 255
#[inline]
pub const fn mul8(a: u8, b: u8) -> u8 {
    scale8_floor(a, b)
}

/// Blend two 8-bit values
#[inline]
#[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
pub const fn blend8(a: u8, b: u8, amount_of_b: u8) -> u8 {
    let delta = b as i16 - a as i16;

    let mut partial: u32 = (a as u32) << 16; // a * 65536
    partial = partial.wrapping_add(
        (delta as u32)
            .wrapping_mul(amount_of_b as u32)
            .wrapping_mul(257),
    ); // (b - a) * amount_of_b * 257
    partial = partial.wrapping_add(0x8000); // + 32768 for rounding

    (partial >> 16) as u8
}

/// Calculate progress (0-255) of `step` out of `steps`
#[allow(clippy::cast_possible_truncation)]
#[inline]
pub const fn progress8(step: u32, steps: u32) -> u8 {
    if steps == 0 {
        return 0;
    }
    if step >= steps {
        return 255;
    }

    ((step as u64 * 255) / steps as u64) as u8
}

/// Number of refresh ticks needed to cover `duration_ms`, rounded up
///
/// Returns 1 when either value is zero, which makes a transition snap on the
/// next tick.
#[allow(clippy::cast_possible_truncation)]
#[inline]
pub const fn steps_for(duration_ms: u64, tick_ms: u64) -> u32 {
    if duration_ms == 0 || tick_ms == 0 {
        return 1;
    }
    let steps = duration_ms.div_ceil(tick_ms);
    if steps > u32::MAX as u64 {
        u32::MAX
    } else {
        steps as u32
    }
}
