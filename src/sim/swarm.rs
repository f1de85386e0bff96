//! The four-agent state vector.

use num_complex::Complex64;

/// Number of agents in the swarm
pub const AGENT_COUNT: usize = 4;

/// Positions of the four agents in the complex plane.
///
/// Agent `i` pursues agent `(i + 1) % 4`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Swarm {
    positions: [Complex64; AGENT_COUNT],
}

impl Default for Swarm {
    fn default() -> Self {
        Self::unit_square()
    }
}

impl Swarm {
    /// Corners of the unit square centered at the origin, counter-clockwise
    /// from the first quadrant.
    pub fn unit_square() -> Self {
        Self {
            positions: [
                Complex64::new(0.5, 0.5),
                Complex64::new(-0.5, 0.5),
                Complex64::new(-0.5, -0.5),
                Complex64::new(0.5, -0.5),
            ],
        }
    }

    /// Build a swarm from explicit positions
    pub const fn from_positions(positions: [Complex64; AGENT_COUNT]) -> Self {
        Self { positions }
    }

    /// Current agent positions
    pub fn positions(&self) -> &[Complex64; AGENT_COUNT] {
        &self.positions
    }

    /// Position of agent 0, the agent whose path is recorded
    pub fn leader(&self) -> Complex64 {
        self.positions[0]
    }

    /// Velocity of each agent: the vector to the agent it pursues.
    pub fn velocities(&self) -> [Complex64; AGENT_COUNT] {
        let p = &self.positions;
        std::array::from_fn(|i| p[(i + 1) % AGENT_COUNT] - p[i])
    }

    /// One forward Euler step of size `dt`.
    ///
    /// All velocities come from the pre-step positions.
    pub fn advance(&mut self, dt: f64) {
        let velocities = self.velocities();
        for (position, velocity) in self.positions.iter_mut().zip(velocities) {
            *position += velocity * dt;
        }
    }

    /// Largest distance between an agent's successor and the agent rotated
    /// by +90° about the origin. Zero for a perfectly symmetric swarm.
    pub fn symmetry_defect(&self) -> f64 {
        let p = &self.positions;
        (0..AGENT_COUNT)
            .map(|i| (p[(i + 1) % AGENT_COUNT] - p[i] * Complex64::i()).norm())
            .fold(0.0, f64::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_square_corners() {
        let swarm = Swarm::unit_square();
        for position in swarm.positions() {
            assert_eq!(position.re.abs(), 0.5);
            assert_eq!(position.im.abs(), 0.5);
        }
        assert_eq!(swarm.leader(), Complex64::new(0.5, 0.5));
        assert_eq!(swarm.symmetry_defect(), 0.0);
    }

    #[test]
    fn test_velocities_point_at_target() {
        let velocities = Swarm::unit_square().velocities();
        assert_eq!(velocities[0], Complex64::new(-1.0, 0.0));
        assert_eq!(velocities[1], Complex64::new(0.0, -1.0));
        assert_eq!(velocities[2], Complex64::new(1.0, 0.0));
        assert_eq!(velocities[3], Complex64::new(0.0, 1.0));
    }

    #[test]
    fn test_advance_is_synchronous() {
        let mut swarm = Swarm::unit_square();
        swarm.advance(0.25);
        // Agent 3 must chase agent 0's old position, not its updated one
        assert_eq!(swarm.positions()[3], Complex64::new(0.5, -0.25));
        assert_eq!(swarm.leader(), Complex64::new(0.25, 0.5));
    }

    #[test]
    fn test_asymmetric_swarm_has_defect() {
        let swarm = Swarm::from_positions([
            Complex64::new(1.0, 0.0),
            Complex64::new(0.0, 1.0),
            Complex64::new(-1.0, 0.0),
            Complex64::new(0.0, -2.0),
        ]);
        assert!((swarm.symmetry_defect() - 1.0).abs() < 1e-15);
    }
}
