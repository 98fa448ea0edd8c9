//! Confetti particles for the win celebration.

use core::time::Duration;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::widgets::Widget;

const PARTICLES: usize = 75;
const GRAVITY: f32 = 9.81;

const COLORS: [Color; 5] = [
    Color::Rgb(0xa8, 0x64, 0xfd),
    Color::Rgb(0x29, 0xcd, 0xff),
    Color::Rgb(0x78, 0xff, 0x44),
    Color::Rgb(0xff, 0x71, 0x8d),
    Color::Rgb(0xfd, 0xff, 0x6a),
];
const GLYPHS: [&str; 6] = ["█", "▓", "▒", "░", "▄", "▀"];

#[derive(Debug, Clone, Copy)]
struct Particle {
    x: f32,
    y: f32,
    vx: f32,
    vy: f32,
    color: Color,
    glyph: &'static str,
}

/// A burst of confetti falling from the top of the screen.
#[derive(Debug, Clone)]
pub struct Confetti {
    particles: Vec<Particle>,
    rng: ChaCha8Rng,
}

impl Confetti {
    /// Creates an empty system with a seeded generator.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            particles: Vec::new(),
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Launches a burst from the top centre of a screen `width` cells wide.
    pub fn spawn(&mut self, width: u16) {
        let centre = f32::from(width) / 2.0;
        let spread = f32::from(width) / 4.0;

        self.particles.clear();
        for _ in 0..PARTICLES {
            let x = centre + spread * (self.rng.random::<f32>() - 0.5);
            let particle = Particle {
                x,
                y: 0.0,
                vx: (self.rng.random::<f32>() - 0.5) * 100.0,
                vy: self.rng.random::<f32>() * 50.0,
                color: COLORS[self.rng.random_range(0..COLORS.len())],
                glyph: GLYPHS[self.rng.random_range(0..GLYPHS.len())],
            };
            self.particles.push(particle);
        }
    }

    /// Moves every particle forward by `dt` and drops those below `height`.
    pub fn step(&mut self, dt: Duration, height: u16) {
        let dt = dt.as_secs_f32();
        let floor = f32::from(height);

        for particle in &mut self.particles {
            particle.x += particle.vx * dt;
            particle.y += particle.vy * dt;
            particle.vy += GRAVITY * dt;
        }
        self.particles.retain(|particle| particle.y < floor);
    }

    /// Removes every particle.
    pub fn clear(&mut self) {
        self.particles.clear();
    }

    /// Returns the number of live particles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    /// Returns whether the system is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}

impl Widget for &Confetti {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for particle in &self.particles {
            if particle.x < 0.0 || particle.y < 0.0 {
                continue;
            }
            let x = area.x.saturating_add(particle.x as u16);
            let y = area.y.saturating_add(particle.y as u16);
            if x >= area.right() || y >= area.bottom() {
                continue;
            }
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_symbol(particle.glyph).set_fg(particle.color);
            }
        }
    }
}
