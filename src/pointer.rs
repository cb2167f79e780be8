// Pointer state fed by mousemove/mouseleave, and the pull it exerts on
// particles inside its influence radius

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pointer {
    pub pos: glm::DVec2,
    pub active: bool,
}

impl Default for Pointer {
    fn default() -> Self {
        Pointer {
            pos: glm::vec2(0.0, 0.0),
            active: false,
        }
    }
}

impl Pointer {
    pub fn move_to(&mut self, x: f64, y: f64) {
        self.pos = glm::vec2(x, y);
        self.active = true;
    }

    // Keeps the last position around, it is just ignored until the next move
    pub fn leave(&mut self) {
        self.active = false;
    }

    // Velocity change for a particle at `particle_pos`, or None when the
    // pointer is inactive or too far away. Strength falls off linearly from
    // the pointer to the edge of the radius.
    pub fn pull(&self, particle_pos: &glm::DVec2, radius: f64, strength: f64) -> Option<glm::DVec2> {
        if !self.active {
            return None;
        }
        let delta = self.pos - particle_pos;
        let distance = glm::length(&delta);
        if distance >= radius {
            return None;
        }
        let force = (radius - distance) / radius;
        // atan2(0, 0) is 0, so a pointer sitting exactly on the particle pulls along +x
        let direction = if distance > 0.0 {
            delta / distance
        } else {
            glm::vec2(1.0, 0.0)
        };
        Some(direction * (force * strength))
    }
}
