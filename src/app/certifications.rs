use leptos::{html, prelude::*};

use crate::content::{Section, CERTIFICATIONS_CALLOUT, CERTIFICATION_CATEGORIES, LEARNING_PRINCIPLES};
use crate::motion::Entrance;

use super::section::{use_reveal, CalloutCard, GridBackdrop, PrincipleCard, SectionHeader};

#[component]
pub fn Certifications() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let revealed = use_reveal(section_ref, Section::Certifications);

    view! {
        <section
            id=Section::Certifications.anchor()
            node_ref=section_ref
            class="py-32 bg-gray-50 dark:bg-gray-800 relative overflow-hidden"
        >
            <GridBackdrop cell=50 />
            <div class="container mx-auto px-6 relative z-10">
                <SectionHeader
                    title="CERTIFICATIONS"
                    subtitle="Continuous learning across technology, design and leadership"
                    revealed
                />

                <div class="mb-20">
                    <CalloutCard callout=&CERTIFICATIONS_CALLOUT revealed featured=true />
                </div>

                <div class="grid grid-cols-1 md:grid-cols-3 gap-8 mb-20">
                    {CERTIFICATION_CATEGORIES
                        .iter()
                        .enumerate()
                        .map(|(i, category)| {
                            let entrance = Entrance::zoom(0.9).stagger(200, 150, i);
                            let accent = category.accent;
                            view! {
                                <div
                                    class=format!(
                                        "{} dark:bg-gray-900 border-2 {} rounded-3xl p-8 text-center hover:scale-105 transition-transform duration-300",
                                        accent.bg,
                                        accent.border,
                                    )
                                    style=move || entrance.style(revealed.get())
                                >
                                    <div class=format!(
                                        "w-20 h-20 mx-auto rounded-2xl bg-gradient-to-br {} flex items-center justify-center text-4xl text-white mb-6",
                                        accent.gradient,
                                    )>{category.glyph}</div>
                                    <div class="text-5xl font-black text-gray-900 dark:text-white mb-2">
                                        {category.count}
                                    </div>
                                    <h3 class="text-xl font-bold text-gray-900 dark:text-white mb-3">
                                        {category.title}
                                    </h3>
                                    <p class="text-gray-600 dark:text-gray-300">{category.description}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                <PrincipleCard
                    title="Commitment to Growth"
                    blurb="Every certification is a step in a continuous journey of learning, shaped by curiosity and applied through real projects."
                    principles=&LEARNING_PRINCIPLES
                    revealed
                    delay_ms=700
                />
            </div>
        </section>
    }
}
