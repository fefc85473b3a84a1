use yew::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;

use crate::dom::scroll_to_section;

const SCROLLED_THRESHOLD: f64 = 20.0;

const NAV_LINKS: [(&str, &str); 3] = [
    ("Tarifs", "pricing"),
    ("Promos", "promos"),
    ("Contact", "footer"),
];

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub is_dark: bool,
    pub on_toggle_theme: Callback<()>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let NavProps { is_dark, on_toggle_theme } = props;
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window();
            let listener = window.clone().map(|window| {
                let scroll_window = window.clone();
                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_y = scroll_window.scroll_y().unwrap_or(0.0);
                    is_scrolled.set(scroll_y > SCROLLED_THRESHOLD);
                }) as Box<dyn FnMut()>);

                let _ = window.add_event_listener_with_callback(
                    "scroll",
                    scroll_callback.as_ref().unchecked_ref(),
                );
                scroll_callback
            });

            move || {
                if let (Some(window), Some(scroll_callback)) = (window, listener) {
                    let _ = window.remove_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    );
                }
            }
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let go_to = |id: &'static str| {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(false);
            scroll_to_section(id);
        })
    };

    let toggle_theme = {
        let on_toggle_theme = on_toggle_theme.clone();
        Callback::from(move |_: MouseEvent| on_toggle_theme.emit(()))
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <header class="site-header">
            <div class="promo-banner">
                <span class="promo-banner-prefix">{"OFFRE EXCLUSIVE : "}</span>
                {"PROMO LÈVE-TÔT — "}
                <span class="promo-banner-highlight">{"10% DE RABAIS"}</span>
                {" AVANT LE 15 AVRIL."}
            </div>

            <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
                <div class="nav-content">
                    <a href="#hero" class="nav-logo" onclick={go_to("hero")}>
                        {"ALTEA"}
                    </a>

                    <button class="burger-menu" onclick={toggle_menu} aria-label="Menu">
                        if *menu_open {
                            {"✕"}
                        } else {
                            <>
                                <span></span>
                                <span></span>
                                <span></span>
                            </>
                        }
                    </button>

                    <div class={menu_class}>
                        { for NAV_LINKS.iter().map(|&(label, id)| html! {
                            <a href={format!("#{id}")} class="nav-link" onclick={go_to(id)}>
                                {label.to_uppercase()}
                            </a>
                        }) }
                        <button class="nav-book-button" onclick={go_to("booking")}>
                            {"RÉSERVER"}
                        </button>
                        <button class="theme-toggle" onclick={toggle_theme} aria-label="Changer le thème">
                            { if *is_dark { "☀" } else { "☾" } }
                        </button>
                    </div>
                </div>
            </nav>

            <style>
                {r#"
                .site-header {
                    position: sticky;
                    top: 0;
                    z-index: 50;
                    width: 100%;
                }
                .promo-banner {
                    background: #064e3b;
                    color: #fff;
                    text-align: center;
                    padding: 0.6rem 1rem;
                    font-size: 0.85rem;
                    font-weight: 600;
                    letter-spacing: 0.03em;
                }
                .promo-banner-highlight {
                    color: var(--altea-green);
                    font-weight: 700;
                }
                .top-nav {
                    background: var(--surface);
                    border-bottom: 1px solid var(--border);
                    padding: 1.25rem 0;
                    transition: all 0.3s ease;
                }
                .top-nav.scrolled {
                    padding: 0.75rem 0;
                    backdrop-filter: blur(12px);
                    box-shadow: 0 4px 12px rgba(0, 0, 0, 0.08);
                }
                .nav-content {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }
                .nav-logo {
                    font-size: 1.5rem;
                    font-weight: 900;
                    letter-spacing: -0.05em;
                    color: var(--text);
                    text-decoration: none;
                }
                .nav-right {
                    display: flex;
                    align-items: center;
                    gap: 2rem;
                }
                .nav-link {
                    font-size: 0.875rem;
                    font-weight: 700;
                    letter-spacing: 0.03em;
                    color: var(--text-muted);
                    text-decoration: none;
                }
                .nav-link:hover {
                    color: var(--altea-green);
                }
                .nav-book-button {
                    background: var(--altea-green);
                    color: #fff;
                    border: none;
                    border-radius: 999px;
                    padding: 0.6rem 1.5rem;
                    font-weight: 700;
                    cursor: pointer;
                }
                .nav-book-button:hover {
                    background: var(--altea-green-dark);
                }
                .theme-toggle {
                    background: var(--surface-muted);
                    color: var(--text);
                    border: none;
                    border-radius: 999px;
                    width: 2.5rem;
                    height: 2.5rem;
                    cursor: pointer;
                }
                .burger-menu {
                    display: none;
                    background: none;
                    border: none;
                    color: var(--text);
                    font-size: 1.5rem;
                    cursor: pointer;
                }
                .burger-menu span {
                    display: block;
                    width: 24px;
                    height: 3px;
                    margin: 4px 0;
                    background: var(--text);
                }
                @media (max-width: 768px) {
                    .burger-menu {
                        display: block;
                    }
                    .nav-right {
                        display: none;
                    }
                    .nav-right.mobile-menu-open {
                        display: flex;
                        flex-direction: column;
                        align-items: stretch;
                        position: fixed;
                        top: 100px;
                        left: 0;
                        right: 0;
                        bottom: 0;
                        padding: 2rem;
                        background: var(--surface);
                    }
                    .mobile-menu-open .nav-link {
                        font-size: 1.75rem;
                        font-weight: 900;
                        color: var(--text);
                        border-bottom: 1px solid var(--border);
                        padding-bottom: 1rem;
                    }
                    .mobile-menu-open .nav-book-button {
                        padding: 1.25rem;
                        font-size: 1.25rem;
                        border-radius: 1rem;
                    }
                }
                "#}
            </style>
        </header>
    }
}
