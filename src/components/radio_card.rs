use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct RadioCardProps {
    pub name: AttrValue,
    pub value: AttrValue,
    pub title: AttrValue,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
    pub checked: bool,
    pub on_select: Callback<()>,
}

#[function_component(RadioCard)]
pub fn radio_card(props: &RadioCardProps) -> Html {
    let onchange = {
        let on_select = props.on_select.clone();
        Callback::from(move |_: Event| on_select.emit(()))
    };

    html! {
        <label class={classes!("radio-card", props.checked.then(|| "checked"))}>
            <input
                type="radio"
                name={props.name.clone()}
                value={props.value.clone()}
                checked={props.checked}
                {onchange}
            />
            <div>
                <span class="radio-card-title">{&props.title}</span>
                if let Some(subtitle) = &props.subtitle {
                    <span class="radio-card-subtitle">{subtitle}</span>
                }
            </div>
        </label>
    }
}
