use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ModalShellProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
    pub on_close: Callback<()>,
    pub children: Html,
    /// Wider card for multi-column forms.
    #[prop_or_default]
    pub wide: bool,
}

/// Backdrop + centered card used by every form modal. Renders nothing itself
/// when the caller keeps it unmounted; closing is the caller's state change.
#[function_component(ModalShell)]
pub fn modal_shell(props: &ModalShellProps) -> Html {
    let on_backdrop = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let width = if props.wide { "max-w-2xl" } else { "max-w-md" };

    html! {
        <div class="fixed inset-0 z-40 overflow-y-auto">
            <div class="flex min-h-full items-center justify-center p-4">
                <div class="fixed inset-0 backdrop-blur-sm bg-black/50" onclick={on_backdrop}></div>
                <div class={format!(
                    "relative z-50 w-[95vw] {width} max-h-[90vh] overflow-y-auto border border-gray-700 \
                     bg-[#11161c] rounded-2xl shadow-2xl"
                )}>
                    <div class="relative p-6 border-b border-gray-700">
                        <h2 class="text-xl font-semibold text-white">{&props.title}</h2>
                        if let Some(ref subtitle) = props.subtitle {
                            <p class="text-gray-400 text-sm mt-1">{subtitle}</p>
                        }
                        <button
                            onclick={on_close}
                            class="absolute right-4 top-4 text-gray-400 hover:text-white transition-colors p-1 rounded-lg hover:bg-gray-800/50"
                        >
                            {"✕"}
                        </button>
                    </div>
                    <div class="p-6">
                        { props.children.clone() }
                    </div>
                </div>
            </div>
        </div>
    }
}
