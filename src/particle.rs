// Simple particle struct to keep track of individual position and velocity

use rand::Rng;

pub struct Particle {
    pub pos: glm::DVec2,
    pub vel: glm::DVec2,
}

impl Particle {
    pub fn new(pos_x: f64, pos_y: f64, vel_x: f64, vel_y: f64) -> Particle {
        Particle {
            pos: glm::vec2(pos_x, pos_y),
            vel: glm::vec2(vel_x, vel_y),
        }
    }

    // Uniform position inside the viewport, velocity components in +/- max_speed
    pub fn random<R: Rng>(rng: &mut R, width: f64, height: f64, max_speed: f64) -> Particle {
        let pos_x = rng.gen::<f64>() * width;
        let pos_y = rng.gen::<f64>() * height;
        let vel_x = (rng.gen::<f64>() - 0.5) * 2.0 * max_speed;
        let vel_y = (rng.gen::<f64>() - 0.5) * 2.0 * max_speed;
        Particle::new(pos_x, pos_y, vel_x, vel_y)
    }

    pub fn integrate(&mut self) {
        self.pos += self.vel;
    }

    // Reflects the velocity on any axis that left [0, extent]. The position is
    // not clamped, so a particle may sit outside the viewport for a frame.
    pub fn reflect(&mut self, width: f64, height: f64) {
        reflect_axis(&mut self.vel.x, self.pos.x, width);
        reflect_axis(&mut self.vel.y, self.pos.y, height);
    }

    pub fn is_inside(&self, width: f64, height: f64, slack: f64) -> bool {
        self.pos.x >= -slack
            && self.pos.x <= width + slack
            && self.pos.y >= -slack
            && self.pos.y <= height + slack
    }
}

fn reflect_axis(vel: &mut f64, pos: f64, extent: f64) {
    if pos < 0.0 || pos > extent {
        *vel = -*vel;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn random_particles_start_inside_with_small_velocity() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let p = Particle::random(&mut rng, 800.0, 600.0, 1.0);
            assert!(p.is_inside(800.0, 600.0, 0.0));
            assert!(p.vel.x.abs() <= 1.0 && p.vel.y.abs() <= 1.0);
        }
    }

    #[test]
    fn outward_velocity_is_reflected() {
        let mut p = Particle::new(-0.5, 601.0, -2.0, 3.0);
        p.reflect(800.0, 600.0);
        assert_eq!(p.vel, glm::vec2(2.0, -3.0));
        // Not clamped
        assert_eq!(p.pos, glm::vec2(-0.5, 601.0));
    }

    #[test]
    fn any_velocity_outside_bounds_is_inverted() {
        // Already heading back in, still flipped
        let mut p = Particle::new(-0.5, 50.0, 0.25, 0.0);
        p.reflect(800.0, 600.0);
        assert_eq!(p.vel, glm::vec2(-0.25, 0.0));

        let mut p = Particle::new(400.0, 600.5, 0.0, -0.25);
        p.reflect(800.0, 600.0);
        assert_eq!(p.vel, glm::vec2(0.0, 0.25));
    }

    #[test]
    fn edges_themselves_do_not_reflect() {
        let mut p = Particle::new(0.0, 600.0, -1.0, 1.0);
        p.reflect(800.0, 600.0);
        assert_eq!(p.vel, glm::vec2(-1.0, 1.0));
    }

    #[test]
    fn integrate_adds_velocity_once() {
        let mut p = Particle::new(10.0, 20.0, 1.5, -2.5);
        p.integrate();
        assert_eq!(p.pos, glm::vec2(11.5, 17.5));
    }
}
