//! Decorative background layers.
//!
//! These carry no state; the layout only asks them for markup.

use std::fmt::Write as _;

use maud::{html, Markup};
use rand::Rng;

/// Something that renders a purely decorative layer behind the page.
pub trait Decoration: Send + Sync {
    fn render_layer(&self) -> Markup;
}

/// No decorative layer.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDecoration;

impl Decoration for NoDecoration {
    fn render_layer(&self) -> Markup {
        html! {}
    }
}

/// A field of slowly twinkling stars at random positions.
#[derive(Debug, Clone, Copy)]
pub struct Starfield {
    count: usize,
}

impl Starfield {
    #[must_use]
    pub const fn new(count: usize) -> Self {
        Self { count }
    }
}

impl Decoration for Starfield {
    fn render_layer(&self) -> Markup {
        let mut rng = rand::thread_rng();
        let stars: Vec<String> = (0..self.count)
            .map(|_| {
                let mut style = String::new();
                let _ = write!(
                    style,
                    "left:{:.2}%;top:{:.2}%;--size:{:.1}px;animation-delay:{:.1}s",
                    rng.gen_range(0.0..100.0),
                    rng.gen_range(0.0..100.0),
                    rng.gen_range(1.0..3.0),
                    rng.gen_range(0.0..8.0),
                );
                style
            })
            .collect();

        html! {
            div class="starfield" aria-hidden="true" {
                @for style in &stars {
                    span class="star" style=(style) {}
                }
            }
        }
    }
}
