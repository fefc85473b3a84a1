use std::collections::HashSet;

use yew::prelude::*;

use crate::models::{tier, PropertyType, ServicePlan, ServiceTier, PRICING_TIERS};
use crate::pricing::{leaves_only_price, quote};

#[derive(Properties, PartialEq)]
pub struct PricingSectionProps {
    pub on_select_plan: Callback<(PropertyType, ServicePlan)>,
}

#[derive(Properties, PartialEq)]
struct TierCardProps {
    tier: &'static ServiceTier,
    early_bird: bool,
    with_leaves: bool,
    on_toggle_leaves: Callback<PropertyType>,
    on_select_plan: Callback<(PropertyType, ServicePlan)>,
}

#[function_component(TierCard)]
fn tier_card(props: &TierCardProps) -> Html {
    let tier = props.tier;
    let q = quote(tier, props.with_leaves, props.early_bird);

    let toggle_leaves = {
        let on_toggle_leaves = props.on_toggle_leaves.clone();
        let id = tier.id;
        Callback::from(move |_: MouseEvent| on_toggle_leaves.emit(id))
    };

    let choose = {
        let on_select_plan = props.on_select_plan.clone();
        let id = tier.id;
        let plan = ServicePlan::for_add_on(props.with_leaves);
        Callback::from(move |_: MouseEvent| on_select_plan.emit((id, plan)))
    };

    html! {
        <div class="pricing-card">
            <div class="card-header">
                <h3>{tier.title}</h3>
                <p class="card-subtitle">{tier.subtitle}</p>
            </div>

            <div class="price-box">
                <div class="price">
                    <span class="amount">{format!("{}$", q.total)}</span>
                    <span class="period">{"/ mois"}</span>
                </div>
                <div class="per-visit">
                    {format!("Revient à seulement ~{}$ / visite", q.per_visit_dollars)}
                </div>
                <div class="billing-note">
                    {format!("Facturé sur {} mois", tier.billing_months)}
                </div>
            </div>

            <ul class="feature-list">
                { for tier.features.iter().map(|feature| html! {
                    <li><span class="check">{"✓"}</span>{*feature}</li>
                }) }
            </ul>

            <div
                class={classes!("leaf-option", props.with_leaves.then(|| "selected"))}
                onclick={toggle_leaves}
            >
                <div class="leaf-option-header">
                    <span class="leaf-checkbox">{ if props.with_leaves { "✓" } else { "" } }</span>
                    <span class="leaf-option-title">{"Ajouter nettoyage des feuilles"}</span>
                    <span class="leaf-icon">{"🍂"}</span>
                </div>
                <p class="leaf-option-note">
                    {"Deux passages inclus entre mi-octobre et mi-novembre, selon la météo."}
                </p>
                <p class="leaf-option-price">{format!("+{}$/mois", q.leaf_option)}</p>
            </div>

            <button class="choose-button" onclick={choose}>{"CHOISIR CE FORFAIT"}</button>
        </div>
    }
}

#[function_component(PricingSection)]
pub fn pricing_section(props: &PricingSectionProps) -> Html {
    let early_bird = use_state(|| false);
    let leaves_selected = use_state(HashSet::<PropertyType>::new);

    let toggle_early_bird = {
        let early_bird = early_bird.clone();
        Callback::from(move |_: MouseEvent| early_bird.set(!*early_bird))
    };

    let toggle_leaves = {
        let leaves_selected = leaves_selected.clone();
        Callback::from(move |id: PropertyType| {
            let mut next = (*leaves_selected).clone();
            if !next.remove(&id) {
                next.insert(id);
            }
            leaves_selected.set(next);
        })
    };

    let book_leaves_only = {
        let on_select_plan = props.on_select_plan.clone();
        Callback::from(move |_: MouseEvent| {
            on_select_plan.emit((PropertyType::Detache, ServicePlan::LeavesOnly))
        })
    };

    let jumele_leaves = leaves_only_price(tier(PropertyType::Jumele), *early_bird);
    let detache_leaves = leaves_only_price(tier(PropertyType::Detache), *early_bird);

    html! {
        <section id="pricing" class="pricing-section">
            <div class="section-inner">
                <div class="section-header">
                    <h2>
                        {"Des tarifs simples. "}<br />
                        <span class="accent">{"Une tranquillité totale."}</span>
                    </h2>
                    <p>
                        {"Aucun contrat caché. Abonnement saisonnier de 6 mois (Mai - Octobre). Payable mensuellement."}
                    </p>
                </div>

                <div class="early-bird-toggle" onclick={toggle_early_bird}>
                    <div class={classes!("toggle-option", (!*early_bird).then(|| "active"))}>
                        {"Prix régulier"}
                    </div>
                    <div class={classes!("toggle-option", "discount", early_bird.then(|| "active"))}>
                        {"Prix Lève-Tôt (-10%)"}
                    </div>
                </div>

                if *early_bird {
                    <div class="discount-notice">
                        <span>{"Rabais appliqué – Offre Lève-Tôt (Paiement avant le 15 avril)"}</span>
                    </div>
                }

                <div class="pricing-grid">
                    { for PRICING_TIERS.iter().map(|t| html! {
                        <TierCard
                            key={t.id.code()}
                            tier={t}
                            early_bird={*early_bird}
                            with_leaves={leaves_selected.contains(&t.id)}
                            on_toggle_leaves={toggle_leaves.clone()}
                            on_select_plan={props.on_select_plan.clone()}
                        />
                    }) }
                </div>

                <div class="leaves-only-card">
                    <div class="leaves-only-body">
                        <h3>{"🍃 Ramassage de feuilles seulement"}</h3>
                        <p>
                            {"Deux passages inclus entre mi-octobre et mi-novembre, selon la météo. Paiement à l’avance requis."}
                        </p>
                        <div class="leaves-only-prices">
                            <div>
                                <span class="leaves-only-label">{"Jumelé / Ville"}</span>
                                <span class="leaves-only-amount">{format!("{}$", jumele_leaves)}</span>
                                <span class="period">{" / saison"}</span>
                            </div>
                            <div>
                                <span class="leaves-only-label">{"Détaché / Banlieue"}</span>
                                <span class="leaves-only-amount">{format!("{}$", detache_leaves)}</span>
                                <span class="period">{" / saison"}</span>
                            </div>
                        </div>
                    </div>
                    <button class="outline-button" onclick={book_leaves_only}>
                        {"RÉSERVER FEUILLES SEULEMENT"}
                    </button>
                </div>

                <div class="pricing-disclaimer">
                    <span>{"ⓘ"}</span>
                    <p>
                        {"Les prix affichés s’appliquent aux terrains standards."}<br />
                        {"Les grands terrains et terrains boisés sont desservis sur soumission seulement."}
                    </p>
                </div>
            </div>

            <style>
                {r#"
                .pricing-section {
                    padding: 6rem 0;
                    background: var(--surface);
                }
                .early-bird-toggle {
                    display: flex;
                    width: fit-content;
                    margin: 0 auto 3rem;
                    padding: 0.375rem;
                    border-radius: 999px;
                    border: 1px solid var(--border);
                    background: var(--glass);
                    cursor: pointer;
                }
                .toggle-option {
                    padding: 0.5rem 1.5rem;
                    border-radius: 999px;
                    font-size: 0.875rem;
                    font-weight: 700;
                    color: var(--text-muted);
                    transition: all 0.3s ease;
                }
                .toggle-option.active {
                    background: #fff;
                    color: #111;
                }
                .toggle-option.discount.active {
                    background: var(--altea-green);
                    color: #fff;
                }
                .discount-notice {
                    text-align: center;
                    margin-bottom: 2rem;
                }
                .discount-notice span {
                    display: inline-block;
                    color: var(--altea-green);
                    background: rgba(46, 204, 113, 0.1);
                    border: 1px solid rgba(46, 204, 113, 0.2);
                    border-radius: 999px;
                    padding: 0.375rem 1rem;
                    font-size: 0.875rem;
                    font-weight: 700;
                }
                .pricing-grid {
                    display: grid;
                    grid-template-columns: repeat(2, 1fr);
                    gap: 3rem;
                    max-width: 64rem;
                    margin: 0 auto 4rem;
                }
                .pricing-card {
                    display: flex;
                    flex-direction: column;
                    padding: 2rem;
                    border-radius: 1.5rem;
                    border: 1px solid var(--border);
                    background: var(--glass);
                    backdrop-filter: blur(10px);
                    transition: all 0.3s ease;
                }
                .pricing-card:hover {
                    transform: translateY(-4px);
                    border-color: rgba(46, 204, 113, 0.3);
                    box-shadow: 0 20px 40px rgba(0, 0, 0, 0.1);
                }
                .card-header h3 {
                    font-size: 1.5rem;
                    color: var(--text);
                    margin-bottom: 0.25rem;
                }
                .card-subtitle {
                    font-size: 0.875rem;
                    text-transform: uppercase;
                    letter-spacing: 0.05em;
                    color: var(--text-muted);
                }
                .price-box {
                    margin: 1.5rem 0 2rem;
                    padding: 1.5rem;
                    border-radius: 1rem;
                    background: var(--surface-muted);
                }
                .price .amount {
                    font-size: 3rem;
                    font-weight: 700;
                    color: var(--text);
                }
                .period {
                    color: var(--text-muted);
                }
                .per-visit {
                    color: var(--altea-green);
                    font-size: 0.875rem;
                    font-weight: 600;
                }
                .billing-note {
                    font-size: 0.75rem;
                    color: var(--text-muted);
                }
                .feature-list {
                    list-style: none;
                    padding: 0;
                    flex-grow: 1;
                }
                .feature-list li {
                    display: flex;
                    gap: 0.75rem;
                    margin-bottom: 1rem;
                    color: var(--text);
                }
                .check {
                    color: var(--altea-green);
                }
                .leaf-option {
                    margin: 1.5rem 0 2rem;
                    padding: 1rem;
                    border-radius: 0.75rem;
                    border: 1px solid var(--border);
                    cursor: pointer;
                    user-select: none;
                }
                .leaf-option.selected {
                    border-color: var(--altea-green);
                    background: rgba(46, 204, 113, 0.1);
                }
                .leaf-option-header {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                }
                .leaf-checkbox {
                    width: 1.25rem;
                    height: 1.25rem;
                    border: 1px solid #9ca3af;
                    border-radius: 0.25rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 0.75rem;
                    color: #fff;
                }
                .leaf-option.selected .leaf-checkbox {
                    background: var(--altea-green);
                    border-color: var(--altea-green);
                }
                .leaf-option-title {
                    flex: 1;
                    font-weight: 500;
                    color: var(--text);
                }
                .leaf-option-note,
                .leaf-option-price {
                    padding-left: 2rem;
                    font-size: 0.75rem;
                    color: var(--text-muted);
                }
                .leaf-option-price {
                    font-weight: 600;
                    color: var(--altea-green);
                }
                .choose-button {
                    width: 100%;
                    padding: 1rem;
                    border: none;
                    border-radius: 0.5rem;
                    background: var(--text);
                    color: var(--surface);
                    font-weight: 700;
                    cursor: pointer;
                    transition: all 0.3s ease;
                }
                .choose-button:hover {
                    background: var(--altea-green);
                    color: #fff;
                }
                .leaves-only-card {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    gap: 2rem;
                    max-width: 56rem;
                    margin: 0 auto 3rem;
                    padding: 2rem;
                    border-radius: 1.5rem;
                    border: 1px solid var(--border);
                    background: var(--glass);
                }
                .leaves-only-body h3 {
                    color: var(--text);
                }
                .leaves-only-body p {
                    color: var(--text-muted);
                    font-size: 0.875rem;
                }
                .leaves-only-prices {
                    display: flex;
                    gap: 2rem;
                }
                .leaves-only-label {
                    display: block;
                    font-size: 0.75rem;
                    text-transform: uppercase;
                    color: var(--text-muted);
                }
                .leaves-only-amount {
                    font-size: 1.5rem;
                    font-weight: 700;
                    color: var(--text);
                }
                .outline-button {
                    white-space: nowrap;
                    padding: 0.75rem 1.5rem;
                    border: 2px solid var(--text);
                    border-radius: 0.5rem;
                    background: transparent;
                    color: var(--text);
                    font-weight: 700;
                    cursor: pointer;
                }
                .outline-button:hover {
                    background: var(--text);
                    color: var(--surface);
                }
                .pricing-disclaimer {
                    display: flex;
                    gap: 0.5rem;
                    justify-content: center;
                    max-width: 48rem;
                    margin: 0 auto;
                    padding: 1rem;
                    border-radius: 0.75rem;
                    font-size: 0.875rem;
                    text-align: center;
                    color: var(--text-muted);
                    background: var(--surface-muted);
                }
                @media (max-width: 768px) {
                    .pricing-grid {
                        grid-template-columns: 1fr;
                    }
                    .leaves-only-card {
                        flex-direction: column;
                    }
                }
                "#}
            </style>
        </section>
    }
}
