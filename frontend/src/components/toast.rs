use gloo_timers::callback::Timeout;
use leptos::*;

const DEFAULT_DURATION_MS: u32 = 3000;

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastVariant {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub variant: ToastVariant,
    pub message: String,
}

impl Toast {
    pub fn new(variant: ToastVariant, message: impl Into<String>) -> Self {
        Self {
            variant,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(ToastVariant::Info, message)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(ToastVariant::Success, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(ToastVariant::Warning, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(ToastVariant::Error, message)
    }

    pub fn class(&self) -> &'static str {
        match self.variant {
            ToastVariant::Info => "toast",
            ToastVariant::Success => "toast toast-success",
            ToastVariant::Warning => "toast toast-warning",
            ToastVariant::Error => "toast toast-error",
        }
    }
}

/// Handle for showing toasts from any component.
#[derive(Clone, Copy)]
pub struct Toasts(RwSignal<Option<Toast>>);

impl Toasts {
    pub fn show(&self, toast: Toast) {
        self.0.set(Some(toast));
    }
}

pub fn provide_toasts() -> Toasts {
    let toasts = Toasts(create_rw_signal(None));
    provide_context(toasts);
    toasts
}

pub fn use_toasts() -> Toasts {
    expect_context::<Toasts>()
}

/// Renders the current toast and hides it after a few seconds.
#[component]
pub fn ToastHost(toasts: Toasts, #[prop(optional)] duration_ms: Option<u32>) -> impl IntoView {
    let current = toasts.0;
    let duration = duration_ms.unwrap_or(DEFAULT_DURATION_MS);
    // Replacing the handle drops (and cancels) the previous timeout. It is
    // never cleared on hide, since hiding may happen inside its own callback.
    let pending = store_value(Option::<Timeout>::None);

    create_effect(move |_| {
        if current.with(Option::is_some) {
            pending.set_value(Some(Timeout::new(duration, move || current.set(None))));
        }
    });

    view! {
        {move || current.get().map(|toast| view! {
            <div class=toast.class() role="status">
                <span>{toast.message}</span>
                <button class="toast-dismiss" type="button" on:click=move |_| current.set(None)>
                    "×"
                </button>
            </div>
        })}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_classes() {
        assert_eq!(Toast::info("a").class(), "toast");
        assert_eq!(Toast::success("a").class(), "toast toast-success");
        assert_eq!(Toast::warning("a").class(), "toast toast-warning");
        assert_eq!(Toast::error("a").class(), "toast toast-error");
    }

    #[test]
    fn test_toast_constructors() {
        let toast = Toast::warning("Please select your dates first");
        assert_eq!(toast.variant, ToastVariant::Warning);
        assert_eq!(toast.message, "Please select your dates first");
    }
}
