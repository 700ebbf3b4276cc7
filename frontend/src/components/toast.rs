//! Toast notification surface. Pushing a toast with an id that is already
//! pending replaces it in place, so a loading toast can resolve into the
//! success or failure that follows it.

use std::rc::Rc;

use gloo::timers::callback::Timeout;
use yew::prelude::*;

const SUCCESS_DISMISS_MS: u32 = 3_000;
const ERROR_DISMISS_MS: u32 = 4_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Loading,
    Success,
    Error,
    Info,
}

#[derive(Clone, PartialEq)]
pub struct Toast {
    pub id: AttrValue,
    pub kind: ToastKind,
    pub title: AttrValue,
    pub description: Option<AttrValue>,
}

#[derive(Clone, PartialEq)]
struct ToastItem {
    toast: Toast,
    seq: u32,
}

#[derive(Default, PartialEq)]
struct ToastList {
    items: Vec<ToastItem>,
}

enum ToastAction {
    Push(Toast, u32),
    Dismiss(AttrValue),
    /// Auto-dismiss; only removes the toast if it has not been replaced since
    /// the timeout was scheduled.
    Expire(AttrValue, u32),
}

impl Reducible for ToastList {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut items = self.items.clone();
        match action {
            ToastAction::Push(toast, seq) => {
                items.retain(|item| item.toast.id != toast.id);
                items.push(ToastItem { toast, seq });
            }
            ToastAction::Dismiss(id) => {
                items.retain(|item| item.toast.id != id);
            }
            ToastAction::Expire(id, seq) => {
                items.retain(|item| item.toast.id != id || item.seq != seq);
            }
        }
        Rc::new(Self { items })
    }
}

/// Handle given to the rest of the app for emitting notifications.
#[derive(Clone, PartialEq)]
pub struct ToastContext {
    push: Callback<Toast>,
    dismiss: Callback<AttrValue>,
}

impl ToastContext {
    pub fn show(&self, toast: Toast) {
        self.push.emit(toast);
    }

    pub fn loading(
        &self,
        id: impl Into<AttrValue>,
        title: impl Into<AttrValue>,
        description: Option<AttrValue>,
    ) {
        self.show(Toast {
            id: id.into(),
            kind: ToastKind::Loading,
            title: title.into(),
            description,
        });
    }

    pub fn success(
        &self,
        id: impl Into<AttrValue>,
        title: impl Into<AttrValue>,
        description: Option<AttrValue>,
    ) {
        self.show(Toast {
            id: id.into(),
            kind: ToastKind::Success,
            title: title.into(),
            description,
        });
    }

    pub fn error(
        &self,
        id: impl Into<AttrValue>,
        title: impl Into<AttrValue>,
        description: Option<AttrValue>,
    ) {
        self.show(Toast {
            id: id.into(),
            kind: ToastKind::Error,
            title: title.into(),
            description,
        });
    }

    pub fn info(
        &self,
        id: impl Into<AttrValue>,
        title: impl Into<AttrValue>,
        description: Option<AttrValue>,
    ) {
        self.show(Toast {
            id: id.into(),
            kind: ToastKind::Info,
            title: title.into(),
            description,
        });
    }

    pub fn dismiss(&self, id: impl Into<AttrValue>) {
        self.dismiss.emit(id.into());
    }
}

/// Hook to access the toast surface from function components.
#[hook]
pub fn use_toasts() -> ToastContext {
    use_context::<ToastContext>().expect("ToastContext not found")
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub children: Html,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let list = use_reducer(ToastList::default);
    let counter = use_mut_ref(|| 0u32);

    let context = {
        let dispatcher = list.dispatcher();
        use_memo((), move |_| {
            let push = {
                let dispatcher = dispatcher.clone();
                let counter = counter.clone();
                Callback::from(move |toast: Toast| {
                    let seq = {
                        let mut next = counter.borrow_mut();
                        let seq = *next;
                        *next = next.wrapping_add(1);
                        seq
                    };
                    let auto_dismiss = match toast.kind {
                        ToastKind::Loading => None,
                        ToastKind::Error => Some(ERROR_DISMISS_MS),
                        ToastKind::Success | ToastKind::Info => Some(SUCCESS_DISMISS_MS),
                    };
                    if let Some(ms) = auto_dismiss {
                        let dispatcher = dispatcher.clone();
                        let id = toast.id.clone();
                        // Provider lives for the whole app; the forgotten
                        // timeout cannot outlive its target.
                        Timeout::new(ms, move || {
                            dispatcher.dispatch(ToastAction::Expire(id, seq));
                        })
                        .forget();
                    }
                    dispatcher.dispatch(ToastAction::Push(toast, seq));
                })
            };
            let dismiss = {
                let dispatcher = dispatcher.clone();
                Callback::from(move |id: AttrValue| {
                    dispatcher.dispatch(ToastAction::Dismiss(id));
                })
            };
            ToastContext { push, dismiss }
        })
    };

    html! {
        <ContextProvider<ToastContext> context={(*context).clone()}>
            { props.children.clone() }
            <div class="fixed top-4 right-4 z-50 flex flex-col gap-3 w-80 max-w-[90vw]">
                { for list.items.iter().map(|item| {
                    let toast = item.toast.clone();
                    let dismiss = {
                        let context = (*context).clone();
                        let id = toast.id.clone();
                        Callback::from(move |_| context.dismiss(id.clone()))
                    };
                    html! { <ToastCard {toast} on_dismiss={dismiss} /> }
                })}
            </div>
        </ContextProvider<ToastContext>>
    }
}

#[derive(Properties, PartialEq)]
struct ToastCardProps {
    toast: Toast,
    on_dismiss: Callback<MouseEvent>,
}

#[function_component(ToastCard)]
fn toast_card(props: &ToastCardProps) -> Html {
    let toast = &props.toast;
    let (border, icon) = match toast.kind {
        ToastKind::Loading => ("border-gray-600", html! { <Spinner /> }),
        ToastKind::Success => (
            "border-green-500/40",
            html! { <span class="text-green-400">{"✓"}</span> },
        ),
        ToastKind::Error => (
            "border-red-500/40",
            html! { <span class="text-red-400">{"✕"}</span> },
        ),
        ToastKind::Info => (
            "border-blue-500/40",
            html! { <span class="text-blue-400">{"i"}</span> },
        ),
    };

    html! {
        <div
            role="alert"
            class={format!(
                "bg-[#11161c] border rounded-xl shadow-2xl px-4 py-3 flex items-start gap-3 {}",
                border
            )}
        >
            <div class="shrink-0 mt-0.5">{icon}</div>
            <div class="flex-1 min-w-0">
                <p class="text-white text-sm font-medium">{&toast.title}</p>
                if let Some(ref description) = toast.description {
                    <p class="text-gray-400 text-xs mt-1">{description}</p>
                }
            </div>
            <button
                onclick={props.on_dismiss.clone()}
                class="text-gray-500 hover:text-white transition-colors text-xs"
            >
                {"✕"}
            </button>
        </div>
    }
}

#[function_component(Spinner)]
pub fn spinner() -> Html {
    html! {
        <div
            class="inline-block h-4 w-4 animate-spin rounded-full border-2 border-gray-600 border-t-green-400"
            role="status"
            aria-label="Loading"
        ></div>
    }
}
