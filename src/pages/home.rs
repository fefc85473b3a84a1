use yew::prelude::*;
use log::info;

use crate::components::{
    booking_form::BookingFormView,
    footer::Footer,
    nav::Nav,
    pricing::PricingSection,
    promos::Promos,
};
use crate::dom::{scroll_to_section, set_dark_theme};
use crate::models::{PropertyType, ServicePlan};

const HERO_FALLBACK_IMAGE: &str =
    "https://images.unsplash.com/photo-1558449028-b53a39d100fc?q=80&w=2000&auto=format&fit=crop";

#[function_component(Home)]
pub fn home() -> Html {
    let is_dark = use_state(|| false);
    let selection = use_state(|| (PropertyType::Detache, ServicePlan::Mowing));
    let revision = use_state(|| 0u32);

    {
        use_effect_with_deps(
            move |dark| {
                set_dark_theme(*dark);
                || ()
            },
            *is_dark,
        );
    }

    let toggle_theme = {
        let is_dark = is_dark.clone();
        Callback::from(move |_| is_dark.set(!*is_dark))
    };

    let on_select_plan = {
        let selection = selection.clone();
        let revision = revision.clone();
        Callback::from(move |(property_type, plan): (PropertyType, ServicePlan)| {
            info!("Plan selected: {} / {}", property_type.code(), plan.code());
            selection.set((property_type, plan));
            revision.set(*revision + 1);
            scroll_to_section("booking");
        })
    };

    let hero_image_error = Callback::from(|e: Event| {
        let img: web_sys::HtmlImageElement = e.target_unchecked_into();
        if img.src() != HERO_FALLBACK_IMAGE {
            img.set_src(HERO_FALLBACK_IMAGE);
        }
    });

    html! {
        <div class="site">
            <Nav is_dark={*is_dark} on_toggle_theme={toggle_theme} />

            <section id="hero" class="hero">
                <div class="hero-background">
                    <img
                        src="/fond-herbe.jpg"
                        alt="Pelouse résidentielle parfaite"
                        loading="eager"
                        onerror={hero_image_error}
                    />
                    <div class="hero-overlay"></div>
                </div>

                <div class="hero-content">
                    <div class="hero-rating">
                        <span class="stars">{"★★★★★"}</span>
                        <span class="hero-badge">{"Service 5 Étoiles au Québec"}</span>
                    </div>
                    <h1>
                        {"Tonte de gazon."}<br />
                        <span class="hero-highlight">{"Simplifiée."}</span>
                    </h1>
                    <p class="hero-subtitle">
                        {"Un terrain impeccable sans lever le petit doigt. Nos équipes professionnelles s'occupent de tout pour que vous profitiez de votre été."}
                    </p>
                    <div class="hero-cta-group">
                        <button class="hero-cta" onclick={Callback::from(|_: MouseEvent| scroll_to_section("pricing"))}>
                            {"VOIR LES TARIFS ›"}
                        </button>
                        <button class="hero-cta secondary" onclick={Callback::from(|_: MouseEvent| scroll_to_section("booking"))}>
                            {"RÉSERVER MA PLACE"}
                        </button>
                    </div>
                </div>
            </section>

            <PricingSection {on_select_plan} />
            <Promos />
            <BookingFormView
                property_type={selection.0}
                service_plan={selection.1}
                revision={*revision}
            />
            <Footer />

            <style>
                {r#"
                .hero {
                    position: relative;
                    height: 85vh;
                    min-height: 600px;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    overflow: hidden;
                }
                .hero-background {
                    position: absolute;
                    inset: 0;
                    z-index: 0;
                }
                .hero-background img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }
                .hero-overlay {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to top, #111 0%, rgba(0, 0, 0, 0.4) 50%, rgba(0, 0, 0, 0.5) 100%);
                }
                .hero-content {
                    position: relative;
                    z-index: 1;
                    text-align: center;
                    max-width: 64rem;
                    padding: 0 1.5rem;
                    margin-top: 4rem;
                    color: #fff;
                }
                .hero-rating {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    gap: 0.75rem;
                    margin-bottom: 1.5rem;
                }
                .stars {
                    color: var(--altea-green);
                    letter-spacing: 0.1em;
                }
                .hero-badge {
                    font-size: 0.7rem;
                    font-weight: 900;
                    letter-spacing: 0.2em;
                    text-transform: uppercase;
                    background: rgba(0, 0, 0, 0.2);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    border-radius: 999px;
                    padding: 0.25rem 0.75rem;
                }
                .hero h1 {
                    font-size: clamp(3rem, 9vw, 6rem);
                    font-weight: 900;
                    line-height: 0.9;
                    letter-spacing: -0.04em;
                    margin-bottom: 2rem;
                }
                .hero-highlight {
                    background: linear-gradient(to right, var(--altea-green), #6ee7b7);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .hero-subtitle {
                    font-size: 1.25rem;
                    color: #f3f4f6;
                    max-width: 42rem;
                    margin: 0 auto 3rem;
                    line-height: 1.6;
                }
                .hero-cta-group {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1.25rem;
                    justify-content: center;
                }
                .hero-cta {
                    background: var(--altea-green);
                    color: #fff;
                    border: none;
                    border-radius: 999px;
                    padding: 1.25rem 3rem;
                    font-weight: 900;
                    font-size: 1.1rem;
                    cursor: pointer;
                    transition: all 0.3s ease;
                    box-shadow: 0 20px 50px rgba(46, 204, 113, 0.3);
                }
                .hero-cta:hover {
                    background: var(--altea-green-dark);
                    transform: scale(1.05);
                }
                .hero-cta.secondary {
                    background: rgba(255, 255, 255, 0.1);
                    border: 1px solid rgba(255, 255, 255, 0.3);
                    box-shadow: none;
                    backdrop-filter: blur(20px);
                }
                .hero-cta.secondary:hover {
                    background: rgba(255, 255, 255, 0.2);
                }
                "#}
            </style>
        </div>
    }
}
