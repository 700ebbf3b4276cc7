use yew::prelude::*;

use crate::components::code_entry::{Accent, CodeCopy, CodeEntryModal, Verifier};
use crate::services::auth;

#[derive(Properties, PartialEq)]
pub struct AdminAccessModalProps {
    pub open: bool,
    pub on_close: Callback<()>,
    /// Called once when access is granted.
    pub on_success: Callback<()>,
}

/// Admin passkey gate: the untimed instantiation of the segmented code entry
/// control. The passkey comparison lives in the auth service, not here.
#[function_component(AdminAccessModal)]
pub fn admin_access_modal(props: &AdminAccessModalProps) -> Html {
    let verifier = use_memo((), |_| {
        Verifier::new(|code| async move { auth::verify_admin_passkey(&code).await })
    });

    let copy = CodeCopy {
        verifying: "Verifying access...".into(),
        success_title: "Access Granted!".into(),
        success_description: "Welcome to the admin panel.".into(),
        failure_title: "Access Denied".into(),
        failure_description: "Invalid passkey. Please try again.".into(),
        incomplete_title: "Incomplete Passkey".into(),
        incomplete_description: "Please enter all 6 digits.".into(),
        ..CodeCopy::default()
    };

    html! {
        <CodeEntryModal
            open={props.open}
            on_close={props.on_close.clone()}
            on_success={props.on_success.clone()}
            title="Admin Access"
            description="Enter the admin passkey to continue"
            verifier={(*verifier).clone()}
            input_label="Admin Passkey"
            submit_label="Enter Admin Panel"
            accent={Accent::Blue}
            {copy}
        />
    }
}
