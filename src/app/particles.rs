use leptos::{ev::MouseEvent, prelude::*};
use leptos_use::{use_raf_fn, use_window_size, UseWindowSizeReturn};
use rand::{rngs::SmallRng, SeedableRng};

use crate::particles::ParticleField;

use super::theme::use_theme;

/// SVG particle field. Empty on the server; seeded and animated once hydrated.
#[component]
pub fn ParticleBackground() -> impl IntoView {
    let theme = use_theme();
    let UseWindowSizeReturn { width, height } = use_window_size();
    let field = RwSignal::new(ParticleField::default());
    let rng = StoredValue::new(SmallRng::from_entropy());
    let (pointer, set_pointer) = signal(None::<(f64, f64)>);

    Effect::new(move |_| {
        let (w, h) = (width.get(), height.get());
        if w <= 0.0 || h <= 0.0 {
            return;
        }
        rng.update_value(|rng| field.update(|f| f.resize(w, h, rng)));
    });

    let _ = use_raf_fn(move |_| field.update(ParticleField::step));

    view! {
        <svg
            class="absolute inset-0 w-full h-full"
            viewBox=move || {
                let (w, h) = field.with(ParticleField::size);
                format!("0 0 {} {}", w.max(1.0), h.max(1.0))
            }
            preserveAspectRatio="none"
            aria-hidden="true"
            on:mousemove=move |ev: MouseEvent| {
                set_pointer.set(Some((f64::from(ev.offset_x()), f64::from(ev.offset_y()))))
            }
            on:mouseleave=move |_| set_pointer.set(None)
        >
            {move || {
                let (fill, stroke) = theme.theme.get().particle_colors();
                let pointer = pointer.get();
                field
                    .with(|f| {
                        let mut links = f.links();
                        if let Some(p) = pointer {
                            links.extend(f.grab_links(p));
                        }
                        let lines = links
                            .into_iter()
                            .map(|l| {
                                view! {
                                    <line
                                        x1=format!("{:.1}", l.from.0)
                                        y1=format!("{:.1}", l.from.1)
                                        x2=format!("{:.1}", l.to.0)
                                        y2=format!("{:.1}", l.to.1)
                                        stroke=stroke
                                        stroke-width="1"
                                        stroke-opacity=format!("{:.3}", l.opacity)
                                    />
                                }
                            })
                            .collect_view();
                        let dots = f
                            .particles()
                            .iter()
                            .map(|p| {
                                view! {
                                    <circle
                                        cx=format!("{:.1}", p.x)
                                        cy=format!("{:.1}", p.y)
                                        r=format!("{:.1}", p.radius)
                                        fill=fill
                                        fill-opacity="0.3"
                                    />
                                }
                            })
                            .collect_view();
                        view! {
                            {lines}
                            {dots}
                        }
                    })
            }}
        </svg>
    }
}
