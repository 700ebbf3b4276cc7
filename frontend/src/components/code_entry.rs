//! Segmented code entry: the six-cell input used by OTP verification and the
//! admin passkey gate. One control, parameterized by length, expiry timer and
//! verification delegate.

use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;

use gloo::timers::callback::{Interval, Timeout};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::toast::ToastContext;
use crate::utils::format_countdown;

pub const DEFAULT_CODE_LEN: usize = 6;

/// Delay between a successful verification toast and the control closing.
const CLOSE_DELAY_MS: u32 = 1_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeError {
    Incomplete,
}

/// What a call to [`CodeEntry::input`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    /// Rejected input (non-digit, or the control is expired/submitting).
    Ignored,
    /// Cells and/or focus changed.
    Edited,
    /// This input wrote a digit into the last cell and every cell is now
    /// filled: the auto-submit trigger.
    Filled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// No timer configured, or already expired.
    Idle,
    Running(u32),
    /// The countdown reached zero on this tick. Reported exactly once.
    Expired,
}

/// Pure state of the control: cell values, focus cursor, countdown and the
/// in-flight-submission guard. All UI event handling funnels through here so
/// the behavior is testable without a browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeEntry {
    cells: Vec<String>,
    active: usize,
    duration: Option<u32>,
    remaining: Option<u32>,
    submitting: bool,
}

impl CodeEntry {
    pub fn new(len: usize, duration: Option<u32>) -> Self {
        Self {
            cells: vec![String::new(); len],
            active: 0,
            duration,
            remaining: duration,
            submitting: false,
        }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn cell(&self, index: usize) -> &str {
        &self.cells[index]
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn remaining(&self) -> Option<u32> {
        self.remaining
    }

    pub fn is_expired(&self) -> bool {
        self.remaining == Some(0)
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    fn can_edit(&self) -> bool {
        !self.is_expired() && !self.submitting
    }

    /// Apply raw input on the cell at `index`. Multi-character input is a
    /// paste burst: the leading run of decimal digits is assigned to
    /// consecutive cells, anything past the last cell is discarded, and focus
    /// lands on the last cell written. Single characters must be a digit (or
    /// empty, which clears the cell); anything else is silently dropped.
    pub fn input(&mut self, index: usize, raw: &str) -> InputOutcome {
        if !self.can_edit() || index >= self.cells.len() {
            return InputOutcome::Ignored;
        }
        let last = self.cells.len() - 1;

        if raw.chars().count() > 1 {
            let digits: Vec<char> = raw
                .chars()
                .take_while(char::is_ascii_digit)
                .take(self.cells.len() - index)
                .collect();
            if digits.is_empty() {
                return InputOutcome::Ignored;
            }
            for (offset, digit) in digits.iter().enumerate() {
                self.cells[index + offset] = digit.to_string();
            }
            let landed = (index + digits.len() - 1).min(last);
            self.active = landed;
            if landed == last && self.is_complete() {
                return InputOutcome::Filled;
            }
            return InputOutcome::Edited;
        }

        match raw.chars().next() {
            None => {
                self.cells[index].clear();
                self.active = index;
                InputOutcome::Edited
            }
            Some(ch) if ch.is_ascii_digit() => {
                self.cells[index] = ch.to_string();
                self.active = if index < last { index + 1 } else { index };
                if index == last && self.is_complete() {
                    InputOutcome::Filled
                } else {
                    InputOutcome::Edited
                }
            }
            Some(_) => InputOutcome::Ignored,
        }
    }

    /// Backspace on a non-empty cell clears it in place. On an empty cell it
    /// moves focus one to the left and clears that cell as well.
    pub fn backspace(&mut self, index: usize) {
        if !self.can_edit() || index >= self.cells.len() {
            return;
        }
        if !self.cells[index].is_empty() {
            self.cells[index].clear();
            self.active = index;
        } else if index > 0 {
            self.active = index - 1;
            self.cells[self.active].clear();
        }
    }

    pub fn assembled(&self) -> Result<String, CodeError> {
        if !self.is_complete() {
            return Err(CodeError::Incomplete);
        }
        Ok(self.cells.concat())
    }

    pub fn clear_all(&mut self) {
        for cell in &mut self.cells {
            cell.clear();
        }
    }

    /// Claim the single in-flight verification slot. Returns `false` (and the
    /// trigger is dropped) when a verification is already outstanding, the
    /// code is expired, or the cells are not full.
    pub fn try_begin_submit(&mut self) -> bool {
        if self.submitting || self.is_expired() || !self.is_complete() {
            return false;
        }
        self.submitting = true;
        true
    }

    pub fn finish_submit(&mut self) {
        self.submitting = false;
    }

    /// Rejected verification: cells cleared, focus back on cell 0, ready for
    /// another attempt.
    pub fn reject(&mut self) {
        self.clear_all();
        self.active = 0;
        self.submitting = false;
    }

    /// One elapsed second.
    pub fn tick(&mut self) -> Tick {
        match self.remaining {
            None | Some(0) => Tick::Idle,
            Some(1) => {
                self.remaining = Some(0);
                Tick::Expired
            }
            Some(n) => {
                self.remaining = Some(n - 1);
                Tick::Running(n - 1)
            }
        }
    }

    /// Fresh attempt: cells empty, focus on cell 0, timer back at the full
    /// configured duration. Used on open and on resend.
    pub fn reset(&mut self) {
        self.clear_all();
        self.active = 0;
        self.remaining = self.duration;
        self.submitting = false;
    }
}

// ============================================
// EXTERNAL COLLABORATORS
// ============================================

/// The verification delegate: an injected async check of the assembled code.
/// The control never learns what the correct code is.
#[derive(Clone)]
pub struct Verifier(Rc<dyn Fn(String) -> Pin<Box<dyn Future<Output = bool>>>>);

impl Verifier {
    pub fn new<F, Fut>(check: F) -> Self
    where
        F: Fn(String) -> Fut + 'static,
        Fut: Future<Output = bool> + 'static,
    {
        Self(Rc::new(move |code| {
            let fut: Pin<Box<dyn Future<Output = bool>>> = Box::pin(check(code));
            fut
        }))
    }

    pub fn check(&self, code: String) -> Pin<Box<dyn Future<Output = bool>>> {
        (self.0)(code)
    }
}

impl PartialEq for Verifier {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// An injected fire-and-await action, used for "resend code".
#[derive(Clone)]
pub struct AsyncAction(Rc<dyn Fn() -> Pin<Box<dyn Future<Output = ()>>>>);

impl AsyncAction {
    pub fn new<F, Fut>(run: F) -> Self
    where
        F: Fn() -> Fut + 'static,
        Fut: Future<Output = ()> + 'static,
    {
        Self(Rc::new(move || {
            let fut: Pin<Box<dyn Future<Output = ()>>> = Box::pin(run());
            fut
        }))
    }

    pub fn run(&self) -> Pin<Box<dyn Future<Output = ()>>> {
        (self.0)()
    }
}

impl PartialEq for AsyncAction {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    Green,
    Blue,
}

impl Accent {
    fn cell(&self) -> &'static str {
        match self {
            Accent::Green => "focus:border-green-500 focus:shadow-green-500/25",
            Accent::Blue => "focus:border-blue-500 focus:shadow-blue-500/25",
        }
    }

    fn button(&self) -> &'static str {
        match self {
            Accent::Green => {
                "bg-gradient-to-r from-green-500 to-green-600 hover:from-green-600 hover:to-green-700 hover:shadow-green-500/25"
            }
            Accent::Blue => {
                "bg-gradient-to-r from-blue-500 to-blue-600 hover:from-blue-600 hover:to-blue-700 hover:shadow-blue-500/25"
            }
        }
    }

    fn target(&self) -> &'static str {
        match self {
            Accent::Green => "text-green-400",
            Accent::Blue => "text-blue-400",
        }
    }
}

/// User-facing copy for one instantiation of the control.
#[derive(Clone, PartialEq)]
pub struct CodeCopy {
    pub verifying: AttrValue,
    pub success_title: AttrValue,
    pub success_description: AttrValue,
    pub failure_title: AttrValue,
    pub failure_description: AttrValue,
    pub incomplete_title: AttrValue,
    pub incomplete_description: AttrValue,
    pub expired_title: AttrValue,
    pub expired_description: AttrValue,
    pub expiry_note: AttrValue,
    pub expired_note: AttrValue,
    pub resend_prompt: AttrValue,
    pub resend_sending: AttrValue,
    pub resend_success_title: AttrValue,
    pub resend_success_description: AttrValue,
}

impl Default for CodeCopy {
    fn default() -> Self {
        Self {
            verifying: "Verifying...".into(),
            success_title: "Verified!".into(),
            success_description: "The code was accepted.".into(),
            failure_title: "Verification Failed".into(),
            failure_description: "Invalid code. Please try again.".into(),
            incomplete_title: "Incomplete Code".into(),
            incomplete_description: "Please enter all 6 digits.".into(),
            expired_title: "Code Expired".into(),
            expired_description: "Your code has expired. Please request a new one.".into(),
            expiry_note: "Code expires in".into(),
            expired_note: "Code expired".into(),
            resend_prompt: "Didn't receive code? Resend".into(),
            resend_sending: "Sending...".into(),
            resend_success_title: "New Code Sent!".into(),
            resend_success_description: "A new verification code has been sent.".into(),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct CodeEntryModalProps {
    pub open: bool,
    pub on_close: Callback<()>,
    /// Invoked once after a successful verification, just before closing.
    #[prop_or_default]
    pub on_success: Callback<()>,
    pub title: AttrValue,
    pub description: AttrValue,
    /// Presentational destination string (the phone number for OTP).
    #[prop_or_default]
    pub target: Option<AttrValue>,
    #[prop_or(DEFAULT_CODE_LEN)]
    pub length: usize,
    /// `Some(seconds)` makes this a time-limited code.
    #[prop_or_default]
    pub expiry_secs: Option<u32>,
    pub verifier: Verifier,
    /// Enables the resend row; the action is awaited, then the timer resets.
    #[prop_or_default]
    pub resend: Option<AsyncAction>,
    pub input_label: AttrValue,
    pub submit_label: AttrValue,
    #[prop_or(Accent::Green)]
    pub accent: Accent,
    #[prop_or_default]
    pub copy: CodeCopy,
}

pub enum Msg {
    Input(usize, String),
    KeyDown(usize, KeyboardEvent),
    Submit,
    Tick,
    Verified(bool),
    Finished,
    Resend,
    ResendDone,
}

/// Modal wrapper around [`CodeEntry`]. Owns the countdown interval and the
/// close-delay timeout; both are dropped (and thereby cancelled) on close,
/// success and unmount, so no tick can fire after teardown.
pub struct CodeEntryModal {
    entry: CodeEntry,
    refs: Vec<NodeRef>,
    interval: Option<Interval>,
    close_delay: Option<Timeout>,
    resending: bool,
    focus_pending: bool,
}

impl CodeEntryModal {
    fn toasts(&self, ctx: &Context<Self>) -> ToastContext {
        let (toasts, _) = ctx
            .link()
            .context::<ToastContext>(Callback::noop())
            .expect("ToastContext not found");
        toasts
    }

    fn start_interval(&mut self, ctx: &Context<Self>) {
        self.interval = ctx.props().expiry_secs.map(|_| {
            let link = ctx.link().clone();
            Interval::new(1_000, move || link.send_message(Msg::Tick))
        });
    }

    fn open_fresh(&mut self, ctx: &Context<Self>) {
        self.entry = CodeEntry::new(ctx.props().length, ctx.props().expiry_secs);
        self.resending = false;
        self.close_delay = None;
        self.start_interval(ctx);
        self.focus_pending = true;
    }

    fn teardown(&mut self) {
        self.interval = None;
        self.close_delay = None;
    }

    fn attempt_submit(&mut self, ctx: &Context<Self>) -> bool {
        let copy = &ctx.props().copy;
        if self.entry.is_expired() {
            self.toasts(ctx).error(
                "code-verify",
                copy.expired_title.clone(),
                Some(copy.expired_description.clone()),
            );
            return false;
        }
        match self.entry.assembled() {
            Err(CodeError::Incomplete) => {
                self.toasts(ctx).error(
                    "code-verify",
                    copy.incomplete_title.clone(),
                    Some(copy.incomplete_description.clone()),
                );
                false
            }
            Ok(code) => {
                if !self.entry.try_begin_submit() {
                    return false;
                }
                self.toasts(ctx)
                    .loading("code-verify", copy.verifying.clone(), None);
                let verifier = ctx.props().verifier.clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    let ok = verifier.check(code).await;
                    link.send_message(Msg::Verified(ok));
                });
                true
            }
        }
    }
}

impl Component for CodeEntryModal {
    type Message = Msg;
    type Properties = CodeEntryModalProps;

    fn create(ctx: &Context<Self>) -> Self {
        let props = ctx.props();
        let mut modal = Self {
            entry: CodeEntry::new(props.length, props.expiry_secs),
            refs: (0..props.length).map(|_| NodeRef::default()).collect(),
            interval: None,
            close_delay: None,
            resending: false,
            focus_pending: false,
        };
        if props.open {
            modal.start_interval(ctx);
            modal.focus_pending = true;
        }
        modal
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if old_props.open != ctx.props().open {
            if ctx.props().open {
                self.open_fresh(ctx);
            } else {
                self.teardown();
            }
        }
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Input(index, value) => match self.entry.input(index, &value) {
                InputOutcome::Ignored => {
                    // The DOM input may hold the rejected character; put the
                    // model's value back.
                    if let Some(input) = self.refs[index].cast::<HtmlInputElement>() {
                        input.set_value(self.entry.cell(index));
                    }
                    false
                }
                InputOutcome::Edited => {
                    self.focus_pending = true;
                    true
                }
                InputOutcome::Filled => {
                    self.focus_pending = true;
                    self.attempt_submit(ctx);
                    true
                }
            },
            Msg::KeyDown(index, event) => match event.key().as_str() {
                "Backspace" => {
                    event.prevent_default();
                    self.entry.backspace(index);
                    self.focus_pending = true;
                    true
                }
                "Enter" => {
                    event.prevent_default();
                    self.attempt_submit(ctx)
                }
                _ => false,
            },
            Msg::Submit => self.attempt_submit(ctx),
            Msg::Tick => match self.entry.tick() {
                Tick::Expired => {
                    self.interval = None;
                    let copy = &ctx.props().copy;
                    self.toasts(ctx).error(
                        "code-expiry",
                        copy.expired_title.clone(),
                        Some(copy.expired_description.clone()),
                    );
                    true
                }
                Tick::Running(_) => true,
                Tick::Idle => false,
            },
            Msg::Verified(ok) => {
                self.entry.finish_submit();
                let copy = &ctx.props().copy;
                if ok {
                    self.toasts(ctx).success(
                        "code-verify",
                        copy.success_title.clone(),
                        Some(copy.success_description.clone()),
                    );
                    let link = ctx.link().clone();
                    self.close_delay = Some(Timeout::new(CLOSE_DELAY_MS, move || {
                        link.send_message(Msg::Finished);
                    }));
                } else {
                    self.entry.reject();
                    self.focus_pending = true;
                    self.toasts(ctx).error(
                        "code-verify",
                        copy.failure_title.clone(),
                        Some(copy.failure_description.clone()),
                    );
                }
                true
            }
            Msg::Finished => {
                self.teardown();
                ctx.props().on_success.emit(());
                ctx.props().on_close.emit(());
                false
            }
            Msg::Resend => {
                let Some(resend) = ctx.props().resend.clone() else {
                    return false;
                };
                if self.resending || self.entry.remaining().unwrap_or(0) > 0 {
                    return false;
                }
                self.resending = true;
                let copy = &ctx.props().copy;
                self.toasts(ctx)
                    .loading("code-resend", copy.resend_sending.clone(), None);
                let link = ctx.link().clone();
                spawn_local(async move {
                    resend.run().await;
                    link.send_message(Msg::ResendDone);
                });
                true
            }
            Msg::ResendDone => {
                self.resending = false;
                self.entry.reset();
                self.start_interval(ctx);
                self.focus_pending = true;
                let copy = &ctx.props().copy;
                self.toasts(ctx).success(
                    "code-resend",
                    copy.resend_success_title.clone(),
                    Some(copy.resend_success_description.clone()),
                );
                true
            }
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, _first_render: bool) {
        if self.focus_pending && ctx.props().open {
            if let Some(input) = self.refs[self.entry.active_index()].cast::<HtmlInputElement>() {
                let _ = input.focus();
            }
            self.focus_pending = false;
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        if !props.open {
            return html! {};
        }

        let accent = props.accent;
        let disabled = self.entry.is_expired() || self.entry.is_submitting();
        let on_close = {
            let cb = props.on_close.clone();
            Callback::from(move |_: MouseEvent| cb.emit(()))
        };
        let onsubmit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            Msg::Submit
        });

        let cells = (0..self.entry.len()).map(|index| {
            let oninput = ctx.link().callback(move |e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                Msg::Input(index, input.value())
            });
            let onkeydown = ctx
                .link()
                .callback(move |e: KeyboardEvent| Msg::KeyDown(index, e));
            html! {
                <input
                    ref={self.refs[index].clone()}
                    type="text"
                    inputmode="numeric"
                    maxlength="1"
                    value={self.entry.cell(index).to_string()}
                    {oninput}
                    {onkeydown}
                    disabled={disabled}
                    class={format!(
                        "w-12 h-12 text-center text-lg font-semibold bg-[#11161c] border border-gray-600 \
                         text-white rounded-xl transition-all duration-300 focus:scale-110 focus:shadow-lg \
                         focus:z-10 focus:relative disabled:opacity-50 disabled:cursor-not-allowed {}",
                        accent.cell()
                    )}
                />
            }
        });

        let submit_text = if self.entry.is_expired() {
            props.copy.expired_note.clone()
        } else if self.entry.is_submitting() {
            props.copy.verifying.clone()
        } else {
            props.submit_label.clone()
        };

        html! {
            <div class="fixed inset-0 bg-black/60 backdrop-blur-md flex items-center justify-center z-50 p-4">
                <div class="bg-[#0D0F12] border border-gray-700 rounded-2xl w-full max-w-md p-6 relative">
                    <button
                        onclick={on_close.clone()}
                        class="absolute right-4 top-4 text-gray-400 hover:text-white transition-colors z-10"
                    >
                        {"✕"}
                    </button>
                    <button
                        onclick={on_close}
                        class="flex items-center gap-2 text-gray-400 hover:text-white transition-colors mb-6 text-sm"
                    >
                        {"← Back"}
                    </button>

                    <div class="text-center mb-8">
                        <h2 class="text-2xl font-bold text-white mb-2">{&props.title}</h2>
                        <p class="text-gray-400 text-sm">{&props.description}</p>
                        if let Some(ref target) = props.target {
                            <p class={format!("font-medium mt-2 text-base {}", accent.target())}>{target}</p>
                        }
                    </div>

                    <form {onsubmit} class="space-y-6">
                        <div class="space-y-4">
                            <label class="text-sm font-medium text-gray-300">{&props.input_label}</label>
                            <div class="flex gap-3 justify-center">
                                { for cells }
                            </div>

                            if props.expiry_secs.is_some() {
                                <div class="text-center mt-4">
                                    if let Some(remaining) = self.entry.remaining().filter(|r| *r > 0) {
                                        <div class="flex items-center justify-center gap-2 text-sm text-gray-400">
                                            <span>{&props.copy.expiry_note}</span>
                                            <span class={format!(
                                                "font-mono px-2 py-1 rounded-lg bg-green-400/10 {}",
                                                accent.target()
                                            )}>
                                                {format_countdown(remaining)}
                                            </span>
                                        </div>
                                    } else {
                                        <div class="text-sm text-red-400 font-medium">
                                            {&props.copy.expired_note}
                                        </div>
                                    }
                                </div>
                            }
                        </div>

                        <button
                            type="submit"
                            disabled={disabled || !self.entry.is_complete()}
                            class={format!(
                                "w-full py-4 text-lg font-semibold text-white rounded-xl shadow-lg \
                                 transition-all duration-300 disabled:opacity-50 disabled:cursor-not-allowed {}",
                                accent.button()
                            )}
                        >
                            {submit_text}
                        </button>

                        if props.resend.is_some() {
                            <div class="text-center">
                                <button
                                    type="button"
                                    onclick={ctx.link().callback(|_| Msg::Resend)}
                                    disabled={self.resending || self.entry.remaining().unwrap_or(0) > 0}
                                    class={format!(
                                        "text-sm font-medium transition-all duration-300 {}",
                                        if self.resending || self.entry.remaining().unwrap_or(0) > 0 {
                                            "text-gray-500 cursor-not-allowed"
                                        } else {
                                            "text-green-400 hover:text-green-300"
                                        }
                                    )}
                                >
                                    if self.resending {
                                        {&props.copy.resend_sending}
                                    } else {
                                        {&props.copy.resend_prompt}
                                    }
                                </button>
                            </div>
                        }
                    </form>
                </div>
            </div>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry() -> CodeEntry {
        CodeEntry::new(6, None)
    }

    fn timed_entry() -> CodeEntry {
        CodeEntry::new(6, Some(120))
    }

    #[test]
    fn sequential_typing_fills_and_focuses_last() {
        let mut e = entry();
        for (i, ch) in "348012".chars().enumerate() {
            e.input(i, &ch.to_string());
        }
        assert_eq!(e.assembled(), Ok("348012".to_string()));
        assert_eq!(e.active_index(), 5);
    }

    #[test]
    fn typing_advances_focus_until_last_cell() {
        let mut e = entry();
        assert_eq!(e.input(0, "7"), InputOutcome::Edited);
        assert_eq!(e.active_index(), 1);
        assert_eq!(e.input(1, "7"), InputOutcome::Edited);
        assert_eq!(e.active_index(), 2);
    }

    #[test]
    fn assembled_fails_while_incomplete() {
        let mut e = entry();
        e.input(0, "1");
        assert_eq!(e.assembled(), Err(CodeError::Incomplete));
    }

    #[test]
    fn paste_longer_than_capacity_truncates() {
        let mut e = entry();
        assert_eq!(e.input(0, "12345678"), InputOutcome::Filled);
        assert_eq!(e.assembled(), Ok("123456".to_string()));
        assert_eq!(e.active_index(), 5);
    }

    #[test]
    fn paste_at_offset_stops_at_last_cell() {
        let mut e = entry();
        assert_eq!(e.input(4, "98765"), InputOutcome::Edited);
        assert_eq!(e.cell(4), "9");
        assert_eq!(e.cell(5), "8");
        assert_eq!(e.active_index(), 5);
        // Cells before the offset are untouched.
        assert_eq!(e.cell(3), "");
    }

    #[test]
    fn short_paste_focuses_last_written_cell() {
        let mut e = entry();
        e.input(1, "42");
        assert_eq!(e.cell(1), "4");
        assert_eq!(e.cell(2), "2");
        assert_eq!(e.active_index(), 2);
    }

    #[test]
    fn paste_takes_only_the_leading_digit_run() {
        let mut e = entry();
        assert_eq!(e.input(0, "12ab34"), InputOutcome::Edited);
        assert_eq!(e.cell(0), "1");
        assert_eq!(e.cell(1), "2");
        assert_eq!(e.cell(2), "");
        assert_eq!(e.input(0, "xy1234"), InputOutcome::Ignored);
    }

    #[test]
    fn non_digit_keystroke_is_silently_dropped() {
        let mut e = entry();
        e.input(0, "5");
        let before = e.clone();
        assert_eq!(e.input(1, "a"), InputOutcome::Ignored);
        assert_eq!(e, before);
    }

    #[test]
    fn backspace_on_filled_cell_clears_in_place() {
        let mut e = entry();
        e.input(0, "3");
        e.input(1, "4");
        e.backspace(1);
        assert_eq!(e.cell(1), "");
        assert_eq!(e.cell(0), "3");
        assert_eq!(e.active_index(), 1);
    }

    #[test]
    fn backspace_on_empty_cell_moves_left_and_clears() {
        let mut e = entry();
        e.input(0, "1");
        e.input(1, "2");
        e.input(2, "3");
        // Focus is on cell 3 (empty). Backspace moves to 2 and clears it.
        e.backspace(3);
        assert_eq!(e.active_index(), 2);
        assert_eq!(e.cell(2), "");
        assert_eq!(e.cell(1), "2");
    }

    #[test]
    fn backspace_on_first_empty_cell_is_a_noop() {
        let mut e = entry();
        e.backspace(0);
        assert_eq!(e.active_index(), 0);
        assert_eq!(e.assembled(), Err(CodeError::Incomplete));
    }

    #[test]
    fn auto_submit_only_on_full_fill_ending_last() {
        let mut e = entry();
        // Fill everything but cell 2.
        e.input(0, "1");
        e.input(1, "2");
        e.input(3, "4");
        e.input(4, "5");
        // Writing the last cell with cell 2 still empty is not a fill.
        assert_eq!(e.input(5, "6"), InputOutcome::Edited);
        // Completing the hole elsewhere is not a fill either.
        assert_eq!(e.input(2, "3"), InputOutcome::Edited);
        // Re-writing the last cell with everything full is.
        assert_eq!(e.input(5, "6"), InputOutcome::Filled);
    }

    #[test]
    fn submit_guard_drops_second_trigger() {
        let mut e = entry();
        e.input(0, "123456");
        assert!(e.try_begin_submit());
        assert!(!e.try_begin_submit());
        e.finish_submit();
        assert!(e.try_begin_submit());
    }

    #[test]
    fn submit_requires_complete_cells() {
        let mut e = entry();
        e.input(0, "123");
        assert!(!e.try_begin_submit());
    }

    #[test]
    fn editing_is_blocked_while_submitting() {
        let mut e = entry();
        e.input(0, "123456");
        assert!(e.try_begin_submit());
        assert_eq!(e.input(0, "9"), InputOutcome::Ignored);
        assert_eq!(e.cell(0), "1");
    }

    #[test]
    fn rejection_clears_cells_and_returns_focus() {
        let mut e = entry();
        e.input(0, "123456");
        assert!(e.try_begin_submit());
        e.reject();
        assert!(!e.is_submitting());
        assert_eq!(e.active_index(), 0);
        assert_eq!(e.assembled(), Err(CodeError::Incomplete));
    }

    #[test]
    fn countdown_expires_exactly_once_after_full_duration() {
        let mut e = timed_entry();
        assert_eq!(e.remaining(), Some(120));
        assert_eq!(format_countdown(e.remaining().unwrap()), "02:00");

        e.input(0, "12");
        let mut expirations = 0;
        for _ in 0..120 {
            if e.tick() == Tick::Expired {
                expirations += 1;
            }
        }
        assert_eq!(expirations, 1);
        assert!(e.is_expired());
        // Further ticks are idle, not repeated expirations.
        assert_eq!(e.tick(), Tick::Idle);
        // Cells remain as last set; edits and submission are disabled.
        assert_eq!(e.cell(0), "1");
        assert_eq!(e.cell(1), "2");
        assert_eq!(e.input(2, "3"), InputOutcome::Ignored);
        assert!(!e.try_begin_submit());
    }

    #[test]
    fn untimed_entry_never_expires() {
        let mut e = entry();
        for _ in 0..500 {
            assert_eq!(e.tick(), Tick::Idle);
        }
        assert!(!e.is_expired());
    }

    #[test]
    fn reset_restores_full_duration_and_clears_cells() {
        let mut e = timed_entry();
        e.input(0, "987654");
        for _ in 0..120 {
            e.tick();
        }
        assert!(e.is_expired());
        e.reset();
        assert!(!e.is_expired());
        assert_eq!(e.remaining(), Some(120));
        assert_eq!(e.active_index(), 0);
        assert_eq!(e.assembled(), Err(CodeError::Incomplete));
        assert_eq!(e.input(0, "1"), InputOutcome::Edited);
    }
}
