use contracts::enums::ServiceType;
use leptos::prelude::*;

use crate::shared::components::ui::{Button, Select, Textarea};
use crate::shared::config::use_app_config;
use crate::shared::i18n::{tr, use_locale};
use crate::shared::timers::{every, TimerSlot};

const HERO_IMAGES: [&str; 4] = [
    "/hero/car1.jpg",
    "/hero/car2.jpg",
    "/hero/car3.jpg",
    "/hero/car4.jpg",
];

struct Testimonial {
    name: &'static str,
    review: &'static str,
    rating: u8,
}

static TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        name: "James M.",
        review: "Outstanding service, fast and transparent. My car feels brand new.",
        rating: 5,
    },
    Testimonial {
        name: "Linda K.",
        review: "HagaGandi handled my SUV's diagnostics flawlessly. Honest team, great value.",
        rating: 4,
    },
    Testimonial {
        name: "Kevin T.",
        review: "Great communication and updates throughout the repair. Will return for sure!",
        rating: 5,
    },
];

/// Five-star rating string: "★★★★☆" for 4
fn stars(rating: u8) -> String {
    let filled = usize::from(rating.min(5));
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

fn next_hero(index: usize) -> usize {
    (index + 1) % HERO_IMAGES.len()
}

#[component]
fn Hero() -> impl IntoView {
    let config = use_app_config();
    let index = RwSignal::new(0usize);

    let rotation = TimerSlot::new();
    rotation.set(every(config.timings.hero_rotation(), move || {
        index.update(|i| *i = next_hero(*i))
    }));

    view! {
        <section class="hero">
            <img class="hero__image" src=move || HERO_IMAGES[index.get()] alt="HagaGandi hero" />
            <div class="hero__overlay"></div>
            <div class="hero__content">
                <h1 class="hero__title">{tr("homeTitle")}</h1>
                <p class="hero__subtitle">{tr("homeSubtitle")}</p>
                <a href="/book" class="button button--primary hero__cta">{tr("bookNow")}</a>
            </div>
        </section>
    }
}

#[component]
fn Services() -> impl IntoView {
    view! {
        <section class="section services">
            <h2 class="section__title">{tr("ourServices")}</h2>
            <div class="services__grid">
                {ServiceType::all().into_iter().map(|service| view! {
                    <article class="service-card">
                        <img class="service-card__image" src=service.image_path() alt="" />
                        <div class="service-card__body">
                            <h3>{tr(service.label_key())}</h3>
                            <p>{tr(service.blurb_key())}</p>
                        </div>
                    </article>
                }).collect_view()}
            </div>
        </section>
    }
}

/// Feedback form; the review stays local, nothing is sent anywhere.
#[component]
fn FeedbackForm() -> impl IntoView {
    let locale = use_locale();
    let review = RwSignal::new(String::new());
    let rating = RwSignal::new(String::new());

    let rating_options = Signal::derive(move || {
        (1..=5u8)
            .rev()
            .map(|r| {
                let label = format!("{} - {}", stars(r), locale.t(&format!("rating{}", r)));
                (r.to_string(), label)
            })
            .collect::<Vec<_>>()
    });

    view! {
        <form
            class="form feedback-form"
            on:submit=move |ev| {
                ev.prevent_default();
                log::debug!("feedback captured locally ({} stars)", rating.get_untracked());
                review.set(String::new());
                rating.set(String::new());
            }
        >
            <h3>{tr("testimonialsTitle")}</h3>
            <p>{tr("testimonialsSubtitle")}</p>
            <Textarea
                value=review
                rows=3
                placeholder=Signal::derive(tr("reviewPlaceholder"))
                on_input=Callback::new(move |v: String| review.set(v))
            />
            <Select
                value=rating
                options=rating_options
                placeholder=Signal::derive(tr("selectRating"))
                on_change=Callback::new(move |v: String| rating.set(v))
            />
            <Button button_type="submit">{tr("submitFeedback")}</Button>
        </form>
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="page home-page">
            <Hero />

            <section class="section about">
                <h2 class="section__title">{tr("aboutTitle")}</h2>
                <p class="section__lead">{tr("aboutSubtitle")}</p>
            </section>

            <Services />

            <section class="section testimonials">
                <h2 class="section__title">{tr("testimonialsTitle")}</h2>
                <p class="section__lead">{tr("testimonialsSubtitle")}</p>
                <div class="testimonials__grid">
                    {TESTIMONIALS.iter().map(|t| view! {
                        <blockquote class="testimonial">
                            <p class="testimonial__review">{t.review}</p>
                            <footer class="testimonial__name">{t.name}</footer>
                            <div class="testimonial__stars" aria-label=format!("{}/5", t.rating)>
                                {stars(t.rating)}
                            </div>
                        </blockquote>
                    }).collect_view()}
                </div>
                <FeedbackForm />
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stars() {
        assert_eq!(stars(5), "★★★★★");
        assert_eq!(stars(4), "★★★★☆");
        assert_eq!(stars(0), "☆☆☆☆☆");
        assert_eq!(stars(9), "★★★★★");
    }

    #[test]
    fn test_hero_rotation_wraps() {
        let mut index = 0;
        let seen: Vec<usize> = (0..5)
            .map(|_| {
                index = next_hero(index);
                index
            })
            .collect();
        assert_eq!(seen, vec![1, 2, 3, 0, 1]);
    }
}
