use crate::auth::{submit, use_auth_backend, AuthBackend, FormStore, Submission};
use crate::routes::navigation_target;
use crate::timer;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdArrowLeft, LdLogIn, LdMail};
use dioxus_free_icons::Icon;
use shared_types::{AuthForm, AuthMode, AuthSettings, FeatureFlags, FederatedProvider};
use shared_ui::{
    Banner, BannerVariant, Button, ButtonKind, ButtonVariant, Card, CardContent, CardFooter,
    CardHeader, CardTitle, Divider, Form, Input,
};
use tracing::debug;

/// Run a submission and, if it succeeds, hand the redirect path to `navigate`
/// once the redirect delay has passed.
///
/// Spawned from the component scope, so unmounting the screen drops the task
/// together with any pending backend call or redirect timer.
pub(crate) async fn submit_then_redirect<S: FormStore>(
    store: &mut S,
    backend: &dyn AuthBackend,
    submission: Submission,
    settings: &AuthSettings,
    navigate: impl FnOnce(&str),
) {
    if submit(store, backend, submission).await.is_err() {
        return;
    }
    timer::sleep(settings.redirect_delay()).await;
    debug!(path = %settings.redirect_path, "redirecting after authentication");
    navigate(&settings.redirect_path);
}

/// Login / sign-up screen.
///
/// `mode=signup` in the query opens the sign-up form; anything else opens login.
#[component]
pub fn Auth(mode: Option<String>) -> Element {
    let settings: AuthSettings = use_context();
    let backend = use_auth_backend();
    let nav = use_navigator();

    let initial_mode = AuthMode::from_key(mode.as_deref().unwrap_or_default());
    let form = use_signal(|| AuthForm::new(initial_mode));

    let start = {
        let settings = settings.clone();
        move |submission: Submission| {
            let backend = backend.clone();
            let settings = settings.clone();
            spawn(async move {
                let mut form = form;
                submit_then_redirect(&mut form, backend.as_ref(), submission, &settings, |path| {
                    nav.push(navigation_target(path));
                })
                .await;
            });
        }
    };
    let start_federated = start.clone();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./auth_page.css") }

        div { class: "auth-page",
            div { class: "auth-hero",
                div { class: "auth-hero-art" }
                Link { to: navigation_target(&settings.back_path), class: "auth-back",
                    Icon::<LdArrowLeft> { icon: LdArrowLeft, width: 20, height: 20 }
                }
            }

            div { class: "auth-panel",
                AuthPanel {
                    form,
                    on_email: move |_: ()| start(Submission::Email),
                    on_federated: move |provider: FederatedProvider| start_federated(Submission::Federated(provider)),
                }
            }
        }
    }
}

/// The glass card holding banners, the federated button, the form and the
/// mode toggle. Reads [`FeatureFlags`] from context.
#[component]
pub fn AuthPanel(
    form: Signal<AuthForm>,
    on_email: EventHandler<()>,
    on_federated: EventHandler<FederatedProvider>,
) -> Element {
    let flags: FeatureFlags = use_context();
    let mut form = form;
    let provider = FederatedProvider::default();

    let state = form();
    let sign_up = state.mode.is_sign_up();
    let busy = state.is_processing;
    let (toggle_prompt, toggle_action) = state.mode.toggle_text();
    let submit_label = state.mode.submit_label(busy);
    let federated_label = state.mode.federated_label(provider, busy);
    let password_autocomplete = if sign_up {
        "new-password".to_string()
    } else {
        "current-password".to_string()
    };

    rsx! {
        Card { glass: true,
            CardHeader {
                CardTitle { "Memory Lane" }

                if let Some(err) = state.error.clone() {
                    Banner { variant: BannerVariant::Error, message: err }
                }
                if let Some(msg) = state.success.clone() {
                    Banner { variant: BannerVariant::Success, message: msg }
                }
            }

            CardContent {
                if flags.federated {
                    Button {
                        variant: ButtonVariant::Secondary,
                        full_width: true,
                        disabled: !state.can_use_federated(),
                        onclick: move |_: MouseEvent| on_federated.call(provider),
                        Icon::<LdLogIn> { icon: LdLogIn, width: 24, height: 24 }
                        "{federated_label}"
                    }
                    Divider { label: "Or continue with" }
                }

                Form { onsubmit: move |_: FormEvent| on_email.call(()), busy: busy,
                    if sign_up {
                        Input {
                            input_type: "text",
                            placeholder: "Your Name",
                            autocomplete: "name",
                            value: state.name.clone(),
                            disabled: busy,
                            on_input: move |e: FormEvent| form.write().name = e.value(),
                        }
                    }
                    Input {
                        input_type: "email",
                        placeholder: "Email address",
                        autocomplete: "email",
                        value: state.email.clone(),
                        disabled: busy,
                        invalid: state.email_marked_invalid(),
                        on_input: move |e: FormEvent| form.write().email = e.value(),
                    }
                    Input {
                        input_type: "password",
                        placeholder: "Password",
                        autocomplete: password_autocomplete,
                        value: state.password.clone(),
                        disabled: busy,
                        invalid: state.password_marked_invalid(),
                        on_input: move |e: FormEvent| form.write().password = e.value(),
                    }
                    if sign_up {
                        Input {
                            input_type: "password",
                            placeholder: "Confirm Password",
                            autocomplete: "new-password",
                            value: state.confirm_password.clone(),
                            disabled: busy,
                            invalid: state.confirm_marked_invalid(),
                            on_input: move |e: FormEvent| form.write().confirm_password = e.value(),
                        }
                    }
                    Button {
                        kind: ButtonKind::Submit,
                        full_width: true,
                        disabled: !state.can_submit(),
                        Icon::<LdMail> { icon: LdMail, width: 24, height: 24 }
                        "{submit_label}"
                    }
                }
            }

            CardFooter {
                p { class: "auth-toggle",
                    "{toggle_prompt} "
                    span {
                        class: "auth-toggle-link",
                        role: "button",
                        "aria-disabled": "{busy}",
                        onclick: move |_| {
                            if form.write().toggle_mode() {
                                debug!(mode = form.peek().mode.as_str(), "auth mode switched");
                            }
                        },
                        "{toggle_action} here."
                    }
                }
                div { class: "auth-legal",
                    a { href: "#", "Terms of Use" }
                    span { "|" }
                    a { href: "#", "Privacy Policy" }
                }
            }
        }
    }
}
