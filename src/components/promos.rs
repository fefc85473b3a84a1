use yew::prelude::*;

use crate::dom::scroll_to_section;

#[function_component(Promos)]
pub fn promos() -> Html {
    let check_availability = Callback::from(|_: MouseEvent| scroll_to_section("booking"));

    html! {
        <section id="promos" class="promos-section">
            <div class="section-inner">
                <div class="promos-card">
                    <div class="promos-text">
                        <h2>{"Économisez encore plus"}</h2>
                        <p class="promos-intro">
                            {"Nous récompensons l'organisation et le voisinage. Profitez de nos offres saisonnières exclusives."}
                        </p>

                        <div class="promo-item">
                            <div class="promo-icon green">{"🏷"}</div>
                            <div>
                                <h3>{"Promo Lève-Tôt"}</h3>
                                <p class="promo-deadline">{"Jusqu'au 15 Avril"}</p>
                                <p>
                                    {"Réservez votre saison avant le 15 avril et obtenez "}
                                    <span class="promo-highlight green">{"10% de rabais"}</span>
                                    {" immédiat sur la totalité du contrat."}
                                </p>
                            </div>
                        </div>

                        <div class="promo-divider"></div>

                        <div class="promo-item">
                            <div class="promo-icon blue">{"👥"}</div>
                            <div>
                                <h3>{"Duo Voisin"}</h3>
                                <p class="promo-deadline">{"Offre illimitée"}</p>
                                <p>
                                    {"Signez avec un voisin immédiat et obtenez chacun "}
                                    <span class="promo-highlight blue">{"50$ de crédit"}</span>
                                    {" sur votre dernière mensualité."}
                                </p>
                            </div>
                        </div>
                    </div>

                    <div class="promos-visual">
                        <div class="promo-badge">
                            <span class="promo-badge-value">{"-10%"}</span>
                            <span class="promo-badge-label">{"Early Bird"}</span>
                        </div>
                        <button class="availability-button" onclick={check_availability}>
                            {"Vérifier la disponibilité ↓"}
                        </button>
                    </div>
                </div>
            </div>

            <style>
                {r#"
                .promos-section {
                    padding: 5rem 0;
                    background: var(--surface);
                    border-top: 1px solid var(--border);
                }
                .promos-card {
                    display: grid;
                    grid-template-columns: repeat(2, 1fr);
                    gap: 3rem;
                    align-items: center;
                    padding: 3rem;
                    border-radius: 1.5rem;
                    color: #fff;
                    background: linear-gradient(135deg, #111827, #1f2937);
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                }
                .promos-text h2 {
                    font-size: 1.875rem;
                    margin-bottom: 1rem;
                }
                .promos-intro {
                    color: #d1d5db;
                    font-size: 1.125rem;
                    margin-bottom: 2rem;
                }
                .promo-item {
                    display: flex;
                    gap: 1rem;
                }
                .promo-item h3 {
                    font-size: 1.25rem;
                    margin-bottom: 0.25rem;
                }
                .promo-icon {
                    height: fit-content;
                    padding: 0.75rem;
                    border-radius: 0.75rem;
                }
                .promo-icon.green {
                    background: rgba(46, 204, 113, 0.2);
                }
                .promo-icon.blue {
                    background: rgba(59, 130, 246, 0.2);
                }
                .promo-deadline {
                    color: #9ca3af;
                    font-size: 0.875rem;
                }
                .promo-highlight {
                    font-weight: 700;
                }
                .promo-highlight.green {
                    color: var(--altea-green);
                }
                .promo-highlight.blue {
                    color: #60a5fa;
                }
                .promo-divider {
                    height: 1px;
                    margin: 1.5rem 0;
                    background: rgba(255, 255, 255, 0.1);
                }
                .promos-visual {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 2rem;
                }
                .promo-badge {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    width: 16rem;
                    height: 16rem;
                    border-radius: 50%;
                    border: 1px solid rgba(46, 204, 113, 0.3);
                }
                .promo-badge-value {
                    font-size: 3rem;
                    font-weight: 700;
                }
                .promo-badge-label {
                    font-size: 0.875rem;
                    letter-spacing: 0.2em;
                    text-transform: uppercase;
                    color: var(--altea-green);
                }
                .availability-button {
                    padding: 1rem 2rem;
                    border: none;
                    border-radius: 0.75rem;
                    background: #fff;
                    color: #111827;
                    font-weight: 700;
                    font-size: 1.125rem;
                    cursor: pointer;
                }
                .availability-button:hover {
                    background: var(--altea-green);
                    color: #fff;
                }
                @media (max-width: 768px) {
                    .promos-card {
                        grid-template-columns: 1fr;
                        padding: 2rem;
                    }
                    .promo-badge {
                        display: none;
                    }
                }
                "#}
            </style>
        </section>
    }
}
