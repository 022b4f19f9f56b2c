//! Spin wheel segments and randomness collaborator

/// Wheel segment values in display order
pub static WHEEL_SEGMENTS: &[u64] = &[10, 20, 50, 30, 75, 100, 15, 40];

/// Supplies a uniformly chosen segment index for a spin
pub trait SpinSource {
    fn pick(&mut self, segments: usize) -> usize;
}

/// OS-backed randomness with a time/pid fallback
#[derive(Debug, Clone, Copy, Default)]
pub struct OsSpinSource;

impl SpinSource for OsSpinSource {
    fn pick(&mut self, segments: usize) -> usize {
        let mut bytes = [0u8; 8];
        let raw = if getrandom::getrandom(&mut bytes).is_ok() {
            u64::from_le_bytes(bytes)
        } else {
            // Best-effort draw if the OS RNG is unavailable
            let nanos = std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_nanos())
                .unwrap_or(0);
            let pid = std::process::id() as u128;
            (nanos ^ pid.rotate_left(17)) as u64
        };
        (raw % segments.max(1) as u64) as usize
    }
}
