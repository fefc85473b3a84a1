use yew::prelude::*;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use wasm_bindgen_futures::spawn_local;
use log::{error, info};

use crate::booking::{BookingForm, Field, FormAction, FormPhase, ReferralField};
use crate::components::radio_card::RadioCard;
use crate::models::{PropertyType, ServicePlan};
use crate::submission::SubmissionAdapter;

#[derive(Properties, PartialEq)]
pub struct BookingFormProps {
    pub property_type: PropertyType,
    pub service_plan: ServicePlan,
    /// Bumped on every pick so choosing the same plan twice still reapplies it.
    #[prop_or_default]
    pub revision: u32,
}

fn input_value(e: InputEvent) -> String {
    let input: HtmlInputElement = e.target_unchecked_into();
    input.value()
}

fn on_edit(form: &UseReducerHandle<BookingForm>, field: Field) -> Callback<InputEvent> {
    let form = form.clone();
    Callback::from(move |e: InputEvent| form.dispatch(FormAction::Edit(field, input_value(e))))
}

fn on_blur(form: &UseReducerHandle<BookingForm>, field: Field) -> Callback<FocusEvent> {
    let form = form.clone();
    Callback::from(move |_: FocusEvent| form.dispatch(FormAction::Blur(field)))
}

fn on_edit_referral(form: &UseReducerHandle<BookingForm>, field: ReferralField) -> Callback<InputEvent> {
    let form = form.clone();
    Callback::from(move |e: InputEvent| form.dispatch(FormAction::EditReferral(field, input_value(e))))
}

fn field_class(has_error: bool) -> Classes {
    classes!("form-input", has_error.then(|| "invalid"))
}

#[function_component(BookingFormView)]
pub fn booking_form_view(props: &BookingFormProps) -> Html {
    let form = use_reducer(|| BookingForm::new(props.property_type, props.service_plan));

    // follow plan picks made in the pricing section
    {
        let form = form.clone();
        use_effect_with_deps(
            move |(property_type, plan, _)| {
                form.dispatch(FormAction::Preselect(*property_type, *plan));
                || ()
            },
            (props.property_type, props.service_plan, props.revision),
        );
    }

    {
        let attempts = form.attempts;
        let form = form.clone();
        use_effect_with_deps(
            move |_| {
                if form.is_submitting() {
                    let request = form.request.clone();
                    spawn_local(async move {
                        let adapter = SubmissionAdapter::from_env();
                        let result = adapter.submit(&request).await.map_err(|e| {
                            error!("Booking submission failed: {}", e);
                            gloo_console::error!(format!("EmailJS: {}", e));
                            e.user_message()
                        });
                        if result.is_ok() {
                            info!("Booking submitted");
                        }
                        form.dispatch(FormAction::SubmitFinished(result));
                    });
                }
                || ()
            },
            attempts,
        );
    }

    match &form.phase {
        FormPhase::Submitted => render_success(&form),
        FormPhase::Editing { .. } | FormPhase::Submitting => render_form(&form),
    }
}

fn render_success(form: &UseReducerHandle<BookingForm>) -> Html {
    let start_over = {
        let form = form.clone();
        Callback::from(move |_: MouseEvent| form.dispatch(FormAction::Reset))
    };

    html! {
        <section id="booking" class="booking-section">
            <div class="booking-success">
                <div class="success-icon">{"✓"}</div>
                <h2>{"Demande Reçue !"}</h2>
                <p>
                    {format!("Merci {} ! Votre demande a été reçue.", form.request.name.trim())}<br />
                    {"Nous vous contacterons sous 24 à 48 heures pour confirmer et vous envoyer votre soumission officielle."}
                </p>
                <button class="link-button" onclick={start_over}>{"Faire une autre demande"}</button>
            </div>
            { booking_styles() }
        </section>
    }
}

fn render_form(form: &UseReducerHandle<BookingForm>) -> Html {
    let request = &form.request;
    let errors = &form.errors;
    let submitting = form.is_submitting();

    let onsubmit = {
        let form = form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            form.dispatch(FormAction::SubmitRequested);
        })
    };

    let select_property = |property_type: PropertyType| {
        let form = form.clone();
        Callback::from(move |_: ()| form.dispatch(FormAction::SelectProperty(property_type)))
    };

    let select_plan = |plan: ServicePlan| {
        let form = form.clone();
        Callback::from(move |_: ()| form.dispatch(FormAction::SelectPlan(plan)))
    };

    let toggle_referral = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.dispatch(FormAction::SetReferralOptIn(input.checked()));
        })
    };

    let referral_address_blur = {
        let form = form.clone();
        Callback::from(move |_: FocusEvent| form.dispatch(FormAction::BlurReferral(ReferralField::Address)))
    };

    let edit_comment = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let textarea: HtmlTextAreaElement = e.target_unchecked_into();
            form.dispatch(FormAction::Edit(Field::Comment, textarea.value()));
        })
    };

    html! {
        <section id="booking" class="booking-section">
            <div class="booking-inner">
                <div class="section-header">
                    <h2>{"Vérifier la disponibilité"}</h2>
                    <p>{"Les places sont limitées par secteur. Bloquez la vôtre maintenant pour la saison."}</p>
                </div>

                <form class="booking-form" {onsubmit}>
                    <div class="form-row">
                        <div class="form-group">
                            <label for="booking-name">{"Nom complet"}</label>
                            <input
                                id="booking-name"
                                type="text"
                                required=true
                                class={field_class(errors.name.is_some())}
                                placeholder="Ex: Jean Tremblay"
                                value={request.name.clone()}
                                oninput={on_edit(form, Field::Name)}
                            />
                            if let Some(message) = errors.name {
                                <p class="field-error">{message}</p>
                            }
                        </div>
                        <div class="form-group">
                            <label for="booking-phone">{"Téléphone"}</label>
                            <input
                                id="booking-phone"
                                type="tel"
                                required=true
                                class={field_class(errors.phone.is_some())}
                                placeholder="(418) 555-0123"
                                value={request.phone.clone()}
                                oninput={on_edit(form, Field::Phone)}
                                onblur={on_blur(form, Field::Phone)}
                            />
                            if let Some(message) = errors.phone {
                                <p class="field-error">{message}</p>
                            }
                        </div>
                    </div>

                    <div class="form-group">
                        <label for="booking-address">{"Adresse de service"}</label>
                        <input
                            id="booking-address"
                            type="text"
                            required=true
                            class={field_class(errors.address.is_some())}
                            placeholder="123 Rue des Érables, Québec, QC, G1A 1A1"
                            value={request.address.clone()}
                            oninput={on_edit(form, Field::Address)}
                            onblur={on_blur(form, Field::Address)}
                        />
                        if let Some(message) = errors.address {
                            <p class="field-error">{message}</p>
                        }
                    </div>

                    <div class="form-group">
                        <label for="booking-email">{"Courriel"}</label>
                        <input
                            id="booking-email"
                            type="email"
                            required=true
                            class={field_class(errors.email.is_some())}
                            placeholder="votre@courriel.com"
                            value={request.email.clone()}
                            oninput={on_edit(form, Field::Email)}
                        />
                        if let Some(message) = errors.email {
                            <p class="field-error">{message}</p>
                        }
                    </div>

                    <div class="form-group">
                        <span class="group-label">{"Type de propriété"}</span>
                        <div class="radio-grid">
                            { for [PropertyType::Jumele, PropertyType::Detache].into_iter().map(|property_type| html! {
                                <RadioCard
                                    key={property_type.code()}
                                    name="property_type"
                                    value={property_type.code()}
                                    title={property_type.label()}
                                    checked={request.property_type == property_type}
                                    on_select={select_property(property_type)}
                                />
                            }) }
                        </div>
                    </div>

                    <div class="form-group">
                        <span class="group-label">{"Choix du forfait"}</span>
                        <div class="radio-stack">
                            { for ServicePlan::ALL.into_iter().map(|plan| html! {
                                <RadioCard
                                    key={plan.code()}
                                    name="service_plan"
                                    value={plan.code()}
                                    title={plan.label()}
                                    subtitle={plan.description().map(AttrValue::from)}
                                    checked={request.service_plan == plan}
                                    on_select={select_plan(plan)}
                                />
                            }) }
                        </div>
                    </div>

                    <p class="form-note">
                        {"Pour les terrains boisés ou besoins hors-normes, veuillez préciser dans les commentaires ci-dessous."}
                    </p>

                    <div class="referral-box">
                        <div class="referral-header">
                            <input
                                type="checkbox"
                                id="referral-opt-in"
                                checked={request.referral_opt_in}
                                onchange={toggle_referral}
                            />
                            <div>
                                <label for="referral-opt-in" class="referral-title">
                                    {"Duo Voisin – Crédit de 50 $ chacun"}
                                </label>
                                <p>{"Signez avec un voisin immédiat et recevez un crédit sur votre dernière mensualité."}</p>
                            </div>
                        </div>

                        if request.referral_opt_in {
                            <div class="referral-fields">
                                <input
                                    class="form-input"
                                    placeholder="Nom du voisin"
                                    required=true
                                    value={request.referral.name.clone()}
                                    oninput={on_edit_referral(form, ReferralField::Name)}
                                />
                                <input
                                    class="form-input"
                                    placeholder="Adresse du voisin"
                                    required=true
                                    value={request.referral.address.clone()}
                                    oninput={on_edit_referral(form, ReferralField::Address)}
                                    onblur={referral_address_blur}
                                />
                                <input
                                    class="form-input"
                                    type="tel"
                                    placeholder="Téléphone du voisin"
                                    required=true
                                    value={request.referral.phone.clone()}
                                    oninput={on_edit_referral(form, ReferralField::Phone)}
                                />
                                <input
                                    class="form-input"
                                    type="email"
                                    placeholder="Courriel du voisin"
                                    required=true
                                    value={request.referral.email.clone()}
                                    oninput={on_edit_referral(form, ReferralField::Email)}
                                />
                            </div>
                            if let Some(message) = errors.referral {
                                <p class="field-error">{message}</p>
                            }
                        }
                    </div>

                    <div class="form-group">
                        <label for="booking-comment">{"Commentaire (optionnel)"}</label>
                        <textarea
                            id="booking-comment"
                            class="form-input comment"
                            placeholder="Informations supplémentaires sur votre terrain (boisé, chien, piscine...)"
                            value={request.comment.clone()}
                            oninput={edit_comment}
                        />
                    </div>

                    if let Some(message) = form.submission_error() {
                        <div class="submit-error">
                            <span>{"⚠"}</span>
                            <p>{message.to_string()}</p>
                        </div>
                    }

                    <button type="submit" class="submit-button" disabled={submitting}>
                        if submitting {
                            <span class="loading-spinner"></span>
                        } else {
                            {"BLOQUER MA PLACE"}
                        }
                    </button>
                </form>
            </div>
            { booking_styles() }
        </section>
    }
}

fn booking_styles() -> Html {
    html! {
        <style>
            {r#"
            .booking-section {
                padding: 6rem 0;
                background: var(--surface-muted);
            }
            .booking-inner {
                max-width: 48rem;
                margin: 0 auto;
                padding: 0 1.5rem;
            }
            .booking-form {
                padding: 2.5rem;
                border-radius: 1rem;
                border: 1px solid var(--border);
                background: var(--surface);
                box-shadow: 0 20px 25px rgba(0, 0, 0, 0.1);
            }
            .form-row {
                display: grid;
                grid-template-columns: repeat(2, 1fr);
                gap: 1.5rem;
            }
            .form-group {
                margin-bottom: 1.5rem;
            }
            .form-group label,
            .group-label {
                display: block;
                margin-bottom: 0.5rem;
                font-size: 0.875rem;
                font-weight: 600;
                color: var(--text-muted);
            }
            .form-input {
                width: 100%;
                padding: 0.75rem 1rem;
                border-radius: 0.5rem;
                border: 1px solid var(--border);
                background: var(--surface-muted);
                color: var(--text);
                outline: none;
                box-sizing: border-box;
            }
            .form-input:focus {
                border-color: var(--altea-green);
                box-shadow: 0 0 0 1px var(--altea-green);
            }
            .form-input.invalid {
                border-color: #fca5a5;
            }
            .form-input.invalid:focus {
                border-color: #ef4444;
                box-shadow: 0 0 0 1px #ef4444;
            }
            .form-input.comment {
                min-height: 100px;
                resize: none;
            }
            .field-error {
                margin-top: 0.25rem;
                font-size: 0.75rem;
                color: #ef4444;
            }
            .radio-grid {
                display: grid;
                grid-template-columns: repeat(2, 1fr);
                gap: 1rem;
            }
            .radio-stack {
                display: flex;
                flex-direction: column;
                gap: 1rem;
            }
            .radio-card {
                display: flex;
                align-items: flex-start;
                gap: 0.75rem;
                padding: 1rem;
                border-radius: 0.75rem;
                border: 1px solid var(--border);
                cursor: pointer;
                transition: all 0.2s ease;
            }
            .radio-card.checked {
                border-color: var(--altea-green);
                background: rgba(46, 204, 113, 0.08);
            }
            .radio-card input {
                width: 1.25rem;
                height: 1.25rem;
                accent-color: var(--altea-green);
            }
            .radio-card-title {
                display: block;
                font-weight: 700;
                color: var(--text);
            }
            .radio-card-subtitle {
                display: block;
                font-size: 0.875rem;
                color: var(--text-muted);
            }
            .form-note {
                margin: 0.75rem 0 2rem;
                text-align: center;
                font-size: 0.75rem;
                font-style: italic;
                color: var(--text-muted);
            }
            .referral-box {
                margin-bottom: 2rem;
                padding: 1.5rem;
                border-radius: 0.75rem;
                border: 1px solid rgba(59, 130, 246, 0.2);
                background: rgba(59, 130, 246, 0.05);
            }
            .referral-header {
                display: flex;
                align-items: flex-start;
                gap: 1rem;
            }
            .referral-header input {
                width: 1.25rem;
                height: 1.25rem;
                margin-top: 0.25rem;
                accent-color: var(--altea-green);
            }
            .referral-title {
                font-weight: 700;
                color: var(--text);
                cursor: pointer;
            }
            .referral-header p {
                font-size: 0.875rem;
                color: var(--text-muted);
            }
            .referral-fields {
                display: grid;
                grid-template-columns: repeat(2, 1fr);
                gap: 1rem;
                margin-top: 1rem;
            }
            .submit-error {
                display: flex;
                align-items: center;
                gap: 0.75rem;
                margin-bottom: 1.5rem;
                padding: 1rem;
                border-radius: 0.5rem;
                background: #fef2f2;
                color: #dc2626;
                font-size: 0.875rem;
                font-weight: 500;
            }
            .submit-button {
                width: 100%;
                padding: 1rem;
                border: none;
                border-radius: 0.5rem;
                background: var(--altea-green);
                color: #fff;
                font-size: 1.125rem;
                font-weight: 700;
                cursor: pointer;
                box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
            }
            .submit-button:hover {
                background: var(--altea-green-dark);
            }
            .submit-button:disabled {
                opacity: 0.7;
                cursor: not-allowed;
            }
            .loading-spinner {
                display: inline-block;
                width: 20px;
                height: 20px;
                border: 3px solid rgba(255, 255, 255, 0.3);
                border-radius: 50%;
                border-top-color: #fff;
                animation: spin 1s ease-in-out infinite;
            }
            @keyframes spin { to { transform: rotate(360deg); } }
            .booking-success {
                max-width: 42rem;
                margin: 0 auto;
                padding: 0 1.5rem;
                text-align: center;
            }
            .success-icon {
                display: flex;
                align-items: center;
                justify-content: center;
                width: 5rem;
                height: 5rem;
                margin: 0 auto 1.5rem;
                border-radius: 50%;
                background: var(--altea-green);
                color: #fff;
                font-size: 2.5rem;
            }
            .booking-success h2 {
                font-size: 1.875rem;
                color: var(--text);
                margin-bottom: 1rem;
            }
            .booking-success p {
                font-size: 1.125rem;
                color: var(--text-muted);
            }
            .link-button {
                margin-top: 2rem;
                border: none;
                background: none;
                color: var(--altea-green);
                font-weight: 500;
                cursor: pointer;
            }
            .link-button:hover {
                text-decoration: underline;
            }
            @media (max-width: 768px) {
                .form-row,
                .radio-grid,
                .referral-fields {
                    grid-template-columns: 1fr;
                }
                .booking-form {
                    padding: 2rem;
                }
            }
            "#}
        </style>
    }
}
