/// Pushes each RGBA8 pixel away from (or toward) its gray intensity by
/// `factor`. Alpha is untouched. A factor of 1.0 is the identity.
pub fn saturate_rgba(bytes: &mut [u8], factor: f32) {
    for px in bytes.chunks_exact_mut(4) {
        let [r, g, b] = [px[0], px[1], px[2]].map(|c| c as f32 / 255.0);
        let intensity = (r + g + b) / 3.0;
        let adjust = |channel: f32| -> u8 {
            let saturated = intensity + (channel - intensity) * factor;
            (saturated.clamp(0.0, 1.0) * 255.0).round() as u8
        };
        px[0] = adjust(r);
        px[1] = adjust(g);
        px[2] = adjust(b);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gray_pixels_stay_gray() {
        let mut bytes = [128, 128, 128, 255, 0, 0, 0, 10];
        saturate_rgba(&mut bytes, 3.0);
        assert_eq!(bytes, [128, 128, 128, 255, 0, 0, 0, 10]);
    }

    #[test]
    fn factor_one_is_identity() {
        let mut bytes = [12, 200, 77, 255];
        saturate_rgba(&mut bytes, 1.0);
        assert_eq!(bytes, [12, 200, 77, 255]);
    }

    #[test]
    fn strong_factor_spreads_channels_and_clamps() {
        let mut bytes = [100, 150, 110, 255];
        saturate_rgba(&mut bytes, 3.0);

        assert!(bytes[0] < 100);
        assert!(bytes[1] > 150);
        assert_eq!(bytes[3], 255);

        let mut vivid = [250, 10, 10, 255];
        saturate_rgba(&mut vivid, 3.0);
        assert_eq!(vivid[0], 255);
        assert_eq!(vivid[1], 0);
    }
}
