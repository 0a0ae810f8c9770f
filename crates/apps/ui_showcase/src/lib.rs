//! Story gallery for the shared primitive library.
//!
//! Each component family renders as a set of stories built from `system_ui` primitives. Every
//! story prints the args it was rendered with as JSON so a reviewer can reproduce a state
//! exactly. The bottom sheet stories are interactive: open the sheet, drag it, and watch the
//! close-request counter.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use leptos::*;
use serde::Serialize;
use sheet_runtime::SheetConfig;
use system_ui::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Component families with a gallery page.
pub enum ComponentFamily {
    /// [`Button`] variants and sizes.
    Button,
    /// [`TextField`] input types, icons, and units.
    TextField,
    /// Interactive [`BottomSheet`] stories.
    BottomSheet,
}

impl ComponentFamily {
    /// Every family, in gallery order.
    pub const ALL: [Self; 3] = [Self::Button, Self::TextField, Self::BottomSheet];

    /// Route segment used in `/components/:name`.
    pub fn slug(self) -> &'static str {
        match self {
            Self::Button => "button",
            Self::TextField => "text-field",
            Self::BottomSheet => "bottom-sheet",
        }
    }

    /// Parses a route segment produced by [`ComponentFamily::slug`].
    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|family| family.slug().eq_ignore_ascii_case(slug.trim()))
    }

    /// Human-readable section heading.
    pub fn title(self) -> &'static str {
        match self {
            Self::Button => "Button",
            Self::TextField => "Text Field",
            Self::BottomSheet => "Bottom Sheet",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
struct ButtonArgs {
    variant: &'static str,
    size: &'static str,
    disabled: bool,
    width: Option<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
struct TextFieldArgs {
    input_type: &'static str,
    label: &'static str,
    placeholder: &'static str,
    unit: Option<&'static str>,
    danger: bool,
}

#[derive(Debug, Clone, PartialEq)]
struct SheetStory {
    id: &'static str,
    name: &'static str,
    blurb: &'static str,
    config: SheetConfig,
}

fn sheet_stories() -> Vec<SheetStory> {
    vec![
        SheetStory {
            id: "default",
            name: "Default",
            blurb: "Intrinsic height, no header. Drag anywhere on the panel with touch.",
            config: SheetConfig::default(),
        },
        SheetStory {
            id: "with-header",
            name: "Header and fixed height",
            blurb: "A 400px sheet with a titled header. Mouse drags start from the header.",
            config: SheetConfig {
                height: SheetHeight::from("400px"),
                show_header: true,
                title: Some("Filters".to_string()),
                ..SheetConfig::default()
            },
        },
        SheetStory {
            id: "backdrop-locked",
            name: "Backdrop close disabled",
            blurb: "Backdrop clicks are ignored; dismiss by dragging or with the Done button.",
            config: SheetConfig {
                enable_backdrop_close: false,
                show_header: true,
                title: Some("Confirm".to_string()),
                ..SheetConfig::default()
            },
        },
    ]
}

fn story_args_json<T: Serialize>(args: &T) -> String {
    match serde_json::to_string_pretty(args) {
        Ok(json) => json,
        Err(err) => {
            logging::warn!("ui showcase args serialize failed: {err}");
            String::new()
        }
    }
}

#[component]
fn StoryArgs(#[prop(into)] json: MaybeSignal<String>) -> impl IntoView {
    view! { <pre class="story-args" data-ui-slot="story-args">{move || json.get()}</pre> }
}

#[component]
fn ButtonGallery() -> impl IntoView {
    let clicks = create_rw_signal(0u32);
    let on_click = Callback::new(move |_| clicks.update(|count| *count += 1));

    let variants = ButtonVariant::ALL
        .into_iter()
        .map(|variant| {
            view! {
                <Button variant=variant on_click=on_click>
                    {variant.token()}
                </Button>
            }
        })
        .collect_view();
    let sizes = ButtonSize::ALL
        .into_iter()
        .map(|size| {
            view! {
                <Button size=size variant=ButtonVariant::Secondary on_click=on_click>
                    {size.token()}
                </Button>
            }
        })
        .collect_view();
    let full_width = ButtonArgs {
        variant: ButtonVariant::Success.token(),
        size: ButtonSize::Lg.token(),
        disabled: false,
        width: Some("100%"),
    };

    view! {
        <article class="story" data-story="button-variants">
            <h3>"Variants"</h3>
            <div class="story-row">{variants}</div>
            <p class="story-log">{move || format!("Clicks: {}", clicks.get())}</p>
        </article>
        <article class="story" data-story="button-sizes">
            <h3>"Sizes"</h3>
            <div class="story-row">{sizes}</div>
        </article>
        <article class="story" data-story="button-full-width">
            <h3>"Full width with icon"</h3>
            <Button
                variant=ButtonVariant::Success
                size=ButtonSize::Lg
                width="100%"
                layout_class="story-cta"
                leading_icon=IconName::Lock
                on_click=on_click
            >
                "Unlock"
            </Button>
            <StoryArgs json=story_args_json(&full_width) />
        </article>
        <article class="story" data-story="button-disabled">
            <h3>"Disabled"</h3>
            <Button variant=ButtonVariant::Danger disabled=true on_click=on_click>
                "Delete"
            </Button>
        </article>
    }
}

#[component]
fn TextFieldGallery() -> impl IntoView {
    let weight = create_rw_signal("72".to_string());
    let weight_args = TextFieldArgs {
        input_type: "number",
        label: "Weight",
        placeholder: "0",
        unit: Some("kg"),
        danger: false,
    };

    view! {
        <article class="story" data-story="text-field-basic">
            <h3>"Text"</h3>
            <TextField
                id="story-name"
                name="display_name"
                label="Name"
                placeholder="Ada Lovelace"
                autocomplete="name"
                max_length=24
                layout_class="story-wide"
            />
        </article>
        <article class="story" data-story="text-field-disabled">
            <h3>"Disabled"</h3>
            <TextField id="story-locked" label="Account id" value="acct-0042" disabled=true />
        </article>
        <article class="story" data-story="text-field-password">
            <h3>"Password"</h3>
            <TextField
                id="story-password"
                label="Password"
                input_type=InputType::Password
                placeholder="At least 8 characters"
                autocomplete="current-password"
            />
        </article>
        <article class="story" data-story="text-field-unit">
            <h3>"Number with unit"</h3>
            <TextField
                id="story-weight"
                label="Weight"
                input_type=InputType::Number
                unit="kg"
                value=weight
                on_input=Callback::new(move |ev: web_sys::Event| weight.set(event_target_value(&ev)))
            />
            <p class="story-log">{move || format!("Value: {}", weight.get())}</p>
            <StoryArgs json=story_args_json(&weight_args) />
        </article>
        <article class="story" data-story="text-field-danger">
            <h3>"Danger tone"</h3>
            <TextField id="story-email" label="Email" tone=FieldTone::Danger placeholder="name@example.com" />
        </article>
    }
}

#[component]
fn BottomSheetStory(story: SheetStory) -> impl IntoView {
    let SheetStory {
        id,
        name,
        blurb,
        config,
    } = story;
    let open = create_rw_signal(false);
    let close_requests = create_rw_signal(0u32);
    let backdrop_close = create_rw_signal(config.enable_backdrop_close);
    let args_config = config.clone();
    let args = Signal::derive(move || {
        story_args_json(&SheetConfig {
            enable_backdrop_close: backdrop_close.get(),
            ..args_config.clone()
        })
    });
    let on_close = Callback::new(move |_| {
        close_requests.update(|count| *count += 1);
        open.set(false);
    });

    view! {
        <article class="story" data-story=id>
            <h3>{name}</h3>
            <p>{blurb}</p>
            <div class="story-row">
                <Button on_click=Callback::new(move |_| open.set(true))>"Open sheet"</Button>
                <Button
                    variant=ButtonVariant::Neutral
                    on_click=Callback::new(move |_| backdrop_close.update(|enabled| *enabled = !*enabled))
                >
                    {move || {
                        if backdrop_close.get() {
                            "Backdrop close: on"
                        } else {
                            "Backdrop close: off"
                        }
                    }}
                </Button>
            </div>
            <p class="story-log">
                {move || format!("on_close requests: {}", close_requests.get())}
            </p>
            <StoryArgs json=args />
            <BottomSheet
                open=open
                on_close=on_close
                height=config.height
                enable_backdrop_close=backdrop_close
                show_header=config.show_header
                title=config.title
                class_name=config.class_name
            >
                <p>"Drag down more than 100px and release to dismiss. Shorter drags spring back."</p>
                <TextField
                    id=format!("{id}-search")
                    label="Search"
                    placeholder="Buttons and fields keep working inside the sheet"
                />
                <Button width="100%" on_click=Callback::new(move |_| open.set(false))>
                    "Done"
                </Button>
            </BottomSheet>
        </article>
    }
}

#[component]
fn BottomSheetPlayground() -> impl IntoView {
    sheet_stories()
        .into_iter()
        .map(|story| view! { <BottomSheetStory story=story /> })
        .collect_view()
}

fn family_section(family: ComponentFamily) -> View {
    let stories = match family {
        ComponentFamily::Button => view! { <ButtonGallery /> }.into_view(),
        ComponentFamily::TextField => view! { <TextFieldGallery /> }.into_view(),
        ComponentFamily::BottomSheet => view! { <BottomSheetPlayground /> }.into_view(),
    };
    view! {
        <section class="story-family" data-family=family.slug()>
            <h2>
                <a href=format!("/components/{}", family.slug())>{family.title()}</a>
            </h2>
            {stories}
        </section>
    }
    .into_view()
}

#[component]
/// Story gallery. Renders every family, or only `family` when set.
pub fn UiShowcaseApp(
    /// Restrict the gallery to one component family.
    #[prop(optional)]
    family: Option<ComponentFamily>,
) -> impl IntoView {
    let families = match family {
        Some(family) => vec![family],
        None => ComponentFamily::ALL.to_vec(),
    };

    view! {
        <main class="ui-showcase">
            <header class="ui-showcase-header">
                <h1>"Primitive stories"</h1>
                <nav>
                    <a href="/">"All"</a>
                    {ComponentFamily::ALL
                        .into_iter()
                        .map(|family| {
                            view! { <a href=format!("/components/{}", family.slug())>{family.title()}</a> }
                        })
                        .collect_view()}
                </nav>
            </header>
            {families.into_iter().map(family_section).collect_view()}
        </main>
    }
}
