// The particle field itself: a fixed-size swarm that wanders, is pulled toward
// the pointer, slows down from friction and bounces off the viewport edges.

use crate::config::FieldConfig;
use crate::particle::Particle;
use crate::pointer::Pointer;
use crate::renderer::Surface;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub struct ParticleField<R = StdRng> {
    config: FieldConfig,
    width: f64,
    height: f64,
    particles: Vec<Particle>,
    particle_style: String,
    trail_style: String,
    rng: R,
}

impl ParticleField<StdRng> {
    pub fn new(config: FieldConfig, width: f64, height: f64) -> Result<Self, String> {
        ParticleField::with_rng(config, width, height, StdRng::from_entropy())
    }
}

impl<R: Rng> ParticleField<R> {
    pub fn with_rng(config: FieldConfig, width: f64, height: f64, rng: R) -> Result<Self, String> {
        config.validate()?;
        let mut field = ParticleField {
            config,
            width,
            height,
            particles: Vec::with_capacity(config.particle_count),
            particle_style: config.particle_color.to_css(),
            trail_style: config.trail_color.to_css(),
            rng,
        };
        field.reset(width, height);
        Ok(field)
    }

    // Throws the whole swarm away and scatters a new one over the viewport.
    // Old positions are not rescaled.
    pub fn reset(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
        self.particles.clear();
        for _ in 0..self.config.particle_count {
            let p = Particle::random(&mut self.rng, width, height, self.config.initial_speed);
            self.particles.push(p);
        }
    }

    pub fn advance(&mut self, pointer: &Pointer) {
        let config = &self.config;
        for particle in &mut self.particles {
            if let Some(pull) =
                pointer.pull(&particle.pos, config.influence_radius, config.attraction_strength)
            {
                particle.vel += pull;
            }

            particle.vel.x += (self.rng.gen::<f64>() - 0.5) * config.wander_strength;
            particle.vel.y += (self.rng.gen::<f64>() - 0.5) * config.wander_strength;

            particle.vel *= config.friction;

            particle.integrate();
            particle.reflect(self.width, self.height);
        }
    }

    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        for particle in &self.particles {
            surface.fill_circle(&particle.pos, self.config.particle_radius, &self.particle_style);
        }
    }

    // One display frame: fade the previous frame into trails, step, paint
    pub fn frame<S: Surface + ?Sized>(&mut self, surface: &mut S, pointer: &Pointer) {
        surface.fade(self.width, self.height, &self.trail_style);
        self.advance(pointer);
        self.draw(surface);
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }
}
