use super::*;

fn button_style(size: ButtonSize, width: Option<&str>) -> String {
    let mut style = format!("height:{}px;", size.height_px());
    if let Some(width) = width.map(str::trim).filter(|width| !width.is_empty()) {
        style.push_str(&format!("width:{width};"));
    }
    style
}

#[component]
/// Shared pill button primitive with semantic color variants and fixed-height sizes.
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] size: ButtonSize,
    /// Explicit CSS width, e.g. `100%` or `240px`. Intrinsic when absent.
    #[prop(optional, into)]
    width: Option<String>,
    #[prop(optional, into)] layout_class: Option<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] leading_icon: Option<IconName>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let class = merge_layout_class("ui-button", layout_class.as_deref());
    let style = button_style(size, width.as_deref());
    view! {
        <button
            type="button"
            class=class
            style=style
            disabled=move || disabled.get()
            data-ui-primitive="true"
            data-ui-kind="button"
            data-ui-variant=variant.token()
            data-ui-size=size.token()
            data-ui-disabled=move || bool_token(disabled.get())
            on:click=move |ev| {
                if disabled.get_untracked() {
                    return;
                }
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            {leading_icon.map(|icon| view! { <Icon icon=icon size=IconSize::Sm /> })}
            {children()}
        </button>
    }
}

/// Rendered `type` attribute. Password fields switch to plain text while revealed.
fn resolved_input_type(input_type: InputType, revealed: bool) -> &'static str {
    match input_type {
        InputType::Text => "text",
        InputType::Password if revealed => "text",
        InputType::Password => "password",
        InputType::Number => "number",
    }
}

/// Password fields fall back to a lock icon when no icon is supplied.
fn leading_icon_for(input_type: InputType, icon: Option<IconName>) -> Option<IconName> {
    match (icon, input_type) {
        (Some(icon), _) => Some(icon),
        (None, InputType::Password) => Some(IconName::Lock),
        (None, _) => None,
    }
}

fn reveal_icon(revealed: bool) -> IconName {
    if revealed {
        IconName::Eye
    } else {
        IconName::EyeOff
    }
}

#[component]
/// Shared labeled text input with optional leading icon, trailing unit, and password reveal.
pub fn TextField(
    #[prop(optional)] input_type: InputType,
    #[prop(optional)] tone: FieldTone,
    #[prop(optional, into)] layout_class: Option<String>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] name: Option<String>,
    /// Visible label, bound to the input through `id`.
    #[prop(optional, into)]
    label: Option<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional)] autocomplete: Option<&'static str>,
    #[prop(optional)] max_length: Option<u32>,
    #[prop(optional)] icon: Option<IconName>,
    /// Unit text rendered outside the input, e.g. `kg`.
    #[prop(optional, into)]
    unit: Option<String>,
    #[prop(optional, into)] value: MaybeSignal<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] on_input: Option<Callback<web_sys::Event>>,
) -> impl IntoView {
    let revealed = create_rw_signal(false);
    let is_password = input_type == InputType::Password;
    let leading_icon = leading_icon_for(input_type, icon);
    let label_for = id.clone();

    view! {
        <div
            class=merge_layout_class("ui-text-field", layout_class.as_deref())
            data-ui-primitive="true"
            data-ui-kind="text-field"
            data-ui-tone=tone.token()
            data-ui-disabled=move || bool_token(disabled.get())
        >
            {label.map(move |label| view! { <label for=label_for data-ui-slot="label">{label}</label> })}
            <div data-ui-slot="row">
                <div
                    data-ui-slot="control"
                    data-ui-has-icon=bool_token(leading_icon.is_some())
                    data-ui-has-toggle=bool_token(is_password)
                >
                    {leading_icon.map(|icon| {
                        view! {
                            <span data-ui-slot="leading-icon">
                                <Icon icon=icon size=IconSize::Sm />
                            </span>
                        }
                    })}
                    <input
                        class="ui-field"
                        id=id
                        name=name
                        placeholder=placeholder
                        autocomplete=autocomplete
                        maxlength=max_length
                        type=move || resolved_input_type(input_type, revealed.get())
                        prop:value=move || value.get()
                        disabled=move || disabled.get()
                        data-ui-slot="input"
                        on:input=move |ev| {
                            if let Some(on_input) = on_input.as_ref() {
                                on_input.call(ev);
                            }
                        }
                    />
                    {is_password.then(|| {
                        view! {
                            <button
                                type="button"
                                data-ui-slot="reveal-toggle"
                                disabled=move || disabled.get()
                                aria-pressed=move || bool_token(revealed.get())
                                on:click=move |_| revealed.update(|revealed| *revealed = !*revealed)
                            >
                                {move || view! { <Icon icon=reveal_icon(revealed.get()) size=IconSize::Sm /> }}
                            </button>
                        }
                    })}
                </div>
                {unit.map(|unit| view! { <span data-ui-slot="unit">{unit}</span> })}
            </div>
        </div>
    }
}
