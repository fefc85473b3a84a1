use chrono::Datelike;
use yew::prelude::*;

use crate::config::CONTACT_INFO;

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer id="footer" class="site-footer">
            <div class="section-inner">
                <div class="footer-grid">
                    <div>
                        <span class="footer-brand">{"ALTEA"}</span>
                        <p class="footer-about">
                            {"Service d'entretien de pelouse résidentiel haut de gamme. Simplifiez votre été avec nos solutions clés en main et profitez pleinement de votre extérieur."}
                        </p>
                    </div>

                    <div>
                        <h3>{"Nous Joindre"}</h3>
                        <ul>
                            <li><strong>{"Adresse: "}</strong>{CONTACT_INFO.address}</li>
                            <li>
                                <strong>{"Téléphone: "}</strong>
                                <a href={format!("tel:{}", CONTACT_INFO.phone)}>{CONTACT_INFO.phone}</a>
                            </li>
                            <li>
                                <strong>{"Courriel: "}</strong>
                                <a href={format!("mailto:{}", CONTACT_INFO.email)}>{CONTACT_INFO.email}</a>
                            </li>
                        </ul>
                    </div>

                    <div>
                        <h3>{"Navigation"}</h3>
                        <ul>
                            <li><a href="#hero">{"Accueil"}</a></li>
                            <li><a href="#pricing">{"Forfaits & Tarifs"}</a></li>
                            <li><a href="#promos">{"Promotions en cours"}</a></li>
                            <li><a href="#booking">{"Réserver maintenant"}</a></li>
                        </ul>
                    </div>
                </div>

                <div class="footer-bottom">
                    <p>{format!("© {year} ALTEA Entretien de pelouse. Tous droits réservés.")}</p>
                </div>
            </div>

            <style>
                {r#"
                .site-footer {
                    padding: 4rem 0 2rem;
                    background: var(--surface-muted);
                    border-top: 1px solid var(--border);
                }
                .footer-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 3rem;
                    margin-bottom: 3rem;
                }
                .footer-brand {
                    font-size: 1.5rem;
                    font-weight: 700;
                    color: var(--text);
                }
                .footer-about {
                    margin-top: 1rem;
                    font-size: 0.875rem;
                    line-height: 1.6;
                    color: var(--text-muted);
                }
                .site-footer h3 {
                    color: var(--text);
                    margin-bottom: 1rem;
                }
                .site-footer ul {
                    list-style: none;
                    padding: 0;
                    font-size: 0.875rem;
                    color: var(--text-muted);
                }
                .site-footer li {
                    margin-bottom: 0.75rem;
                }
                .site-footer a {
                    color: var(--text-muted);
                    text-decoration: none;
                }
                .site-footer a:hover {
                    color: var(--altea-green);
                }
                .footer-bottom {
                    padding-top: 2rem;
                    border-top: 1px solid var(--border);
                    font-size: 0.75rem;
                    color: var(--text-muted);
                }
                @media (max-width: 768px) {
                    .footer-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </footer>
    }
}
