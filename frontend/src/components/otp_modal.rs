use yew::prelude::*;

use crate::components::code_entry::{AsyncAction, CodeCopy, CodeEntryModal, Verifier};
use crate::services::auth;

/// OTP codes are valid for two minutes.
pub const OTP_TIMER_SECONDS: u32 = 120;

#[derive(Properties, PartialEq)]
pub struct OtpModalProps {
    pub open: bool,
    pub on_close: Callback<()>,
    /// Destination the code was sent to; purely presentational.
    pub phone: AttrValue,
}

/// Phone-number verification: the time-limited instantiation of the segmented
/// code entry control, with a resend path.
#[function_component(OtpModal)]
pub fn otp_modal(props: &OtpModalProps) -> Html {
    // Stable delegate identities so the modal is not torn down on re-render.
    let verifier = use_memo((), |_| {
        Verifier::new(|code| async move { auth::verify_otp(&code).await })
    });
    let resend = use_memo((), |_| AsyncAction::new(|| auth::send_otp()));

    let copy = CodeCopy {
        verifying: "Verifying OTP...".into(),
        success_title: "OTP Verified!".into(),
        success_description: "Your phone number has been successfully verified.".into(),
        failure_title: "Verification Failed".into(),
        failure_description: "Invalid OTP. Please try again.".into(),
        incomplete_title: "Incomplete OTP".into(),
        incomplete_description: "Please enter all 6 digits of the OTP.".into(),
        expired_title: "OTP Expired".into(),
        expired_description: "Your OTP has expired. Please request a new one.".into(),
        expiry_note: "OTP expires in".into(),
        expired_note: "OTP expired".into(),
        resend_prompt: "Didn't receive code? Resend OTP".into(),
        resend_sending: "Sending...".into(),
        resend_success_title: "New OTP Sent!".into(),
        resend_success_description: "A new verification code has been sent to your phone.".into(),
    };

    html! {
        <CodeEntryModal
            open={props.open}
            on_close={props.on_close.clone()}
            title="Verify OTP"
            description="Please enter the OTP sent to your registered mobile number"
            target={Some(props.phone.clone())}
            expiry_secs={Some(OTP_TIMER_SECONDS)}
            verifier={(*verifier).clone()}
            resend={Some((*resend).clone())}
            input_label="Enter OTP"
            submit_label="Verify OTP"
            {copy}
        />
    }
}
