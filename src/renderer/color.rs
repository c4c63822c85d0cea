use glam::Vec4;

/// Tracer palette by altitude: deep particle blue at the floor fading
/// through sky blues to cloud white at the ceiling.
pub(crate) const HEIGHT_STOPS: [(f64, f64, f64); 5] = [
    (13.0, 38.0, 212.0),   // particle blue        (0.00)
    (40.0, 100.0, 225.0),  // sky blue             (0.25)
    (110.0, 165.0, 238.0), // pale blue            (0.50)
    (190.0, 215.0, 247.0), // haze                 (0.75)
    (250.0, 250.0, 255.0), // cloud white          (1.00)
];

/// Convert a [0.0, 1.0] value to RGBA by linear interpolation between five stops.
pub fn map_to_rgba(t: f64, stops: &[(f64, f64, f64); 5]) -> [u8; 4] {
    // NaN falls to the first stop
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
    let seg = t * 4.0;
    let i = (seg as usize).min(3);
    let s = seg - i as f64;

    let (r0, g0, b0) = stops[i];
    let (r1, g1, b1) = stops[i + 1];

    [
        (r0 + s * (r1 - r0)) as u8,
        (g0 + s * (g1 - g0)) as u8,
        (b0 + s * (b1 - b0)) as u8,
        255,
    ]
}

/// Particle color for a domain-normalized height.
pub fn height_to_rgba(height: f64) -> [u8; 4] {
    map_to_rgba(height, &HEIGHT_STOPS)
}

/// 8-bit RGBA to the normalized float color a quad sink consumes.
pub fn rgba_to_vec4(rgba: [u8; 4]) -> Vec4 {
    Vec4::new(
        rgba[0] as f32 / 255.0,
        rgba[1] as f32 / 255.0,
        rgba[2] as f32 / 255.0,
        rgba[3] as f32 / 255.0,
    )
}
