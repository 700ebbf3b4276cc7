use carepulse_shared::Doctor;
use yew::prelude::*;
use yew_hooks::use_click_away;

use crate::services::doctors;
use crate::utils::initials;

#[derive(Properties, PartialEq)]
pub struct DoctorSelectProps {
    pub selected: Option<Doctor>,
    pub on_select: Callback<Doctor>,
    /// When set, the selected-doctor card shows a clear button.
    #[prop_or_default]
    pub on_clear: Option<Callback<()>>,
    /// Blue accent for the admin surfaces; green otherwise.
    #[prop_or_default]
    pub blue: bool,
}

/// Physician picker: selected-doctor preview card plus a dropdown over the
/// roster. Closes on any click outside the control.
#[function_component(DoctorSelect)]
pub fn doctor_select(props: &DoctorSelectProps) -> Html {
    let open = use_state(|| false);
    let node = use_node_ref();

    use_click_away(node.clone(), {
        let open = open.clone();
        move |_: Event| open.set(false)
    });

    let toggle = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| open.set(!*open))
    };

    let (card, check) = if props.blue {
        ("bg-blue-500/10 border-blue-500/20", "text-blue-400")
    } else {
        ("bg-green-500/5 border-green-500/20", "text-green-500")
    };

    html! {
        <div class="space-y-3">
            if let Some(ref doctor) = props.selected {
                <div class={format!(
                    "p-3 rounded-xl border flex items-center justify-between {card}"
                )}>
                    <div class="flex items-center gap-3">
                        <DoctorAvatar name={doctor.name.clone()} />
                        <div class="flex flex-col">
                            <p class="text-white font-medium text-sm">{&doctor.name}</p>
                            <p class="text-gray-400 text-xs">{&doctor.specialty}</p>
                        </div>
                    </div>
                    if let Some(ref on_clear) = props.on_clear {
                        <button
                            type="button"
                            onclick={
                                let on_clear = on_clear.clone();
                                Callback::from(move |_: MouseEvent| on_clear.emit(()))
                            }
                            class="text-gray-400 hover:text-white transition-colors"
                        >
                            {"✕"}
                        </button>
                    } else {
                        <span class={check}>{"✓"}</span>
                    }
                </div>
            }

            <div class="relative" ref={node}>
                <button
                    type="button"
                    onclick={toggle}
                    class="w-full bg-[#0D0F12] border border-gray-600 text-white rounded-xl px-4 py-3 \
                           text-sm flex items-center justify-between hover:border-gray-500 transition-colors"
                >
                    <span class="text-gray-500">
                        { if props.selected.is_some() { "Change doctor" } else { "Select a doctor" } }
                    </span>
                    <span class={format!(
                        "text-gray-400 transition-transform {}",
                        if *open { "rotate-180" } else { "" }
                    )}>{"▾"}</span>
                </button>

                if *open {
                    <div class="absolute z-10 w-full mt-2 bg-[#1a1d21] border border-gray-600 rounded-xl \
                                shadow-lg max-h-60 overflow-auto">
                        { for doctors::roster().into_iter().map(|doctor| {
                            let is_selected = props
                                .selected
                                .as_ref()
                                .is_some_and(|selected| selected.name == doctor.name);
                            let onclick = {
                                let on_select = props.on_select.clone();
                                let open = open.clone();
                                let doctor = doctor.clone();
                                Callback::from(move |_: MouseEvent| {
                                    on_select.emit(doctor.clone());
                                    open.set(false);
                                })
                            };
                            html! {
                                <button
                                    type="button"
                                    {onclick}
                                    class="w-full px-4 py-3 text-left text-sm text-white hover:bg-gray-800 \
                                           transition-colors first:rounded-t-xl last:rounded-b-xl flex items-center \
                                           gap-3 border-b border-gray-700 last:border-b-0"
                                >
                                    <DoctorAvatar name={doctor.name.clone()} />
                                    <div class="flex flex-col text-left flex-1">
                                        <span class="font-medium">{&doctor.name}</span>
                                        <span class="text-gray-400 text-xs">{&doctor.specialty}</span>
                                    </div>
                                    if is_selected {
                                        <span class={check}>{"✓"}</span>
                                    }
                                </button>
                            }
                        })}
                    </div>
                }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct DoctorAvatarProps {
    name: AttrValue,
}

#[function_component(DoctorAvatar)]
fn doctor_avatar(props: &DoctorAvatarProps) -> Html {
    html! {
        <div class="h-9 w-9 rounded-full bg-gray-700 flex items-center justify-center shrink-0 \
                    text-gray-200 text-xs font-semibold">
            { initials(&props.name) }
        </div>
    }
}
