//! Decorative floating particle field, purely presentational.

use rand::Rng;
use rand::rngs::ThreadRng;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::Paragraph,
};

/// Neon palette the particles cycle through.
const NEON_COLORS: [Color; 5] = [
    Color::Cyan,
    Color::Magenta,
    Color::Green,
    Color::Yellow,
    Color::LightRed,
];

const PARTICLE_GLYPHS: [char; 3] = ['·', '•', '+'];

/// A single floating particle in normalized [0, 1) coordinates.
#[derive(Debug, Clone, Copy)]
struct Particle {
    x: f32,
    y: f32,
    speed: f32,
    color: Color,
    glyph: char,
}

/// Field of decorative particles drifting upward behind the UI.
///
/// Has no effect on application state; when disabled it renders nothing.
#[derive(Debug)]
pub struct ParticleField {
    particles: Vec<Particle>,
    rng: ThreadRng,
    enabled: bool,
}

impl ParticleField {
    /// Creates a field with the given particle count.
    pub fn new(count: usize, enabled: bool) -> Self {
        let mut rng = rand::thread_rng();
        let particles = (0..count).map(|_| Self::spawn(&mut rng, None)).collect();
        Self {
            particles,
            rng,
            enabled,
        }
    }

    fn spawn(rng: &mut ThreadRng, y: Option<f32>) -> Particle {
        Particle {
            x: rng.gen_range(0.0..1.0),
            y: y.unwrap_or_else(|| rng.gen_range(0.0..1.0)),
            speed: rng.gen_range(0.002..0.012),
            color: NEON_COLORS[rng.gen_range(0..NEON_COLORS.len())],
            glyph: PARTICLE_GLYPHS[rng.gen_range(0..PARTICLE_GLYPHS.len())],
        }
    }

    /// Advances every particle one step, respawning those that drift off
    /// the top edge at the bottom with a fresh position and color.
    pub fn tick(&mut self) {
        if !self.enabled {
            return;
        }
        for particle in &mut self.particles {
            particle.y -= particle.speed;
            if particle.y < 0.0 {
                *particle = Self::spawn(&mut self.rng, Some(1.0));
            }
        }
    }

    /// Renders the field into the given area.
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        if !self.enabled || area.width == 0 || area.height == 0 {
            return;
        }
        for particle in &self.particles {
            let x = area.x + (particle.x * (area.width - 1) as f32) as u16;
            let y = area.y + (particle.y * (area.height - 1) as f32) as u16;
            let cell = Rect::new(x.min(area.right() - 1), y.min(area.bottom() - 1), 1, 1);
            let widget = Paragraph::new(particle.glyph.to_string())
                .style(Style::default().fg(particle.color));
            frame.render_widget(widget, cell);
        }
    }
}
