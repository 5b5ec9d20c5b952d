// SPDX-License-Identifier: MPL-2.0
//! Form submission bridge for the admin panel's page actions.
//!
//! Every admin form funnels through one flow: trim the field values,
//! optionally ask for confirmation on destructive actions, post the
//! request, and turn the `{status, msg}` payload into a localized toast
//! plus a navigation decision. The flow is computed as data — the caller
//! displays the toast and performs the navigation once it completes.

use crate::error::Result;
use crate::i18n::resolver;
use crate::i18n::LocaleContext;
use crate::ui::notifications::Toast;
use serde::Deserialize;
use std::str::FromStr;

/// Action class of a form submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    Add,
    Edit,
    Delete,
    Start,
    Stop,
    Global,
}

impl FormAction {
    /// The action tag as it appears in the page markup.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            FormAction::Add => "add",
            FormAction::Edit => "edit",
            FormAction::Delete => "delete",
            FormAction::Start => "start",
            FormAction::Stop => "stop",
            FormAction::Global => "global",
        }
    }

    /// Whether the action asks the user before proceeding.
    #[must_use]
    pub fn requires_confirmation(&self) -> bool {
        matches!(self, FormAction::Delete)
    }

    /// Whether a successful submission reloads the page. Non-reloading
    /// actions return to the referring page instead.
    #[must_use]
    pub fn reloads_page(&self) -> bool {
        matches!(
            self,
            FormAction::Delete | FormAction::Start | FormAction::Stop | FormAction::Global
        )
    }
}

impl FromStr for FormAction {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "add" => Ok(FormAction::Add),
            "edit" => Ok(FormAction::Edit),
            "delete" => Ok(FormAction::Delete),
            "start" => Ok(FormAction::Start),
            "stop" => Ok(FormAction::Stop),
            "global" => Ok(FormAction::Global),
            other => Err(format!("unknown form action: {}", other)),
        }
    }
}

/// Where the page goes after a successful submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Reload,
    ReturnToReferrer,
}

/// Decoded response payload of a form post.
///
/// Submission failure is carried by `status`, not by transport errors.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FormResponse {
    pub status: bool,
    pub msg: String,
}

/// One prepared form submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSubmission {
    pub action: FormAction,
    pub url: String,
    pub fields: Vec<(String, String)>,
}

impl FormSubmission {
    pub fn new(
        action: FormAction,
        url: impl Into<String>,
        fields: Vec<(String, String)>,
    ) -> Self {
        Self {
            action,
            url: url.into(),
            fields,
        }
    }
}

/// Posts form data and decodes the console's response payload.
pub trait FormTransport {
    fn post(&self, url: &str, fields: &[(String, String)]) -> Result<FormResponse>;
}

/// Asks the user to confirm a destructive action.
pub trait ConfirmPrompt {
    fn confirm(&self, message: &str) -> bool;
}

/// Computed result of driving one submission.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// The user declined the confirmation prompt; nothing was sent.
    Cancelled,
    /// The transport failed; nothing is shown (the page stays as-is).
    NoResponse,
    /// The request completed. The toast is ready for display; the
    /// follow-up navigation runs once the toast is dismissed.
    Completed {
        toast: Toast,
        follow_up: Option<Navigation>,
    },
}

/// Drives a form submission end to end.
///
/// Field values are trimmed first. A destructive action asks the
/// [`ConfirmPrompt`] with the localized `confirm.<action>` string. The
/// response's `status` flag selects a success toast plus navigation, or
/// an error toast leaving the page state unchanged.
pub fn submit(
    submission: &FormSubmission,
    context: &LocaleContext,
    transport: &dyn FormTransport,
    prompt: &dyn ConfirmPrompt,
) -> SubmitOutcome {
    let fields: Vec<(String, String)> = submission
        .fields
        .iter()
        .map(|(name, value)| (name.clone(), value.trim().to_string()))
        .collect();

    if submission.action.requires_confirmation() {
        let message = confirm_message(context, submission.action);
        if !prompt.confirm(&message) {
            return SubmitOutcome::Cancelled;
        }
    }

    let response = match transport.post(&submission.url, &fields) {
        Ok(response) => response,
        Err(err) => {
            log::warn!("form submission to {} failed: {}", submission.url, err);
            return SubmitOutcome::NoResponse;
        }
    };

    let message = resolver::resolve_reply(context.content(), context.locales(), &response.msg);
    if response.status {
        let follow_up = if submission.action.reloads_page() {
            Navigation::Reload
        } else {
            Navigation::ReturnToReferrer
        };
        SubmitOutcome::Completed {
            toast: Toast::success(message),
            follow_up: Some(follow_up),
        }
    } else {
        SubmitOutcome::Completed {
            toast: Toast::error(message),
            follow_up: None,
        }
    }
}

/// Localized confirmation text for a destructive action.
fn confirm_message(context: &LocaleContext, action: FormAction) -> String {
    context
        .content()
        .get_path(&["confirm", action.as_str()])
        .and_then(|node| resolver::resolve(node, context.locales()))
        .unwrap_or_else(|| format!("Are you sure you want to {} it?", action.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::i18n::LocaleNode;
    use crate::ui::notifications::Severity;
    use std::cell::RefCell;

    fn loaded_context(current: Option<&str>) -> LocaleContext {
        let doc = LocaleNode::from_xml(
            "<content>\
               <default>en</default>\
               <languages><en>English</en><zh>中文</zh></languages>\
               <confirm><delete><en>Really delete it?</en><zh>确定要删除吗？</zh></delete></confirm>\
               <reply><addsuccess><en>Added</en><zh>添加成功</zh></addsuccess></reply>\
             </content>",
        )
        .expect("document parses");
        let mut context = LocaleContext::from_document(&doc);
        if let Some(code) = current {
            context.set_current(code);
        }
        context
    }

    struct StubTransport {
        response: Result<FormResponse>,
        posted: RefCell<Vec<(String, Vec<(String, String)>)>>,
    }

    impl StubTransport {
        fn replying(response: Result<FormResponse>) -> Self {
            Self {
                response,
                posted: RefCell::new(Vec::new()),
            }
        }
    }

    impl FormTransport for StubTransport {
        fn post(&self, url: &str, fields: &[(String, String)]) -> Result<FormResponse> {
            self.posted
                .borrow_mut()
                .push((url.to_string(), fields.to_vec()));
            self.response.clone()
        }
    }

    struct Prompt {
        answer: bool,
        asked: RefCell<Vec<String>>,
    }

    impl Prompt {
        fn answering(answer: bool) -> Self {
            Self {
                answer,
                asked: RefCell::new(Vec::new()),
            }
        }
    }

    impl ConfirmPrompt for Prompt {
        fn confirm(&self, message: &str) -> bool {
            self.asked.borrow_mut().push(message.to_string());
            self.answer
        }
    }

    fn ok_response() -> Result<FormResponse> {
        Ok(FormResponse {
            status: true,
            msg: "Add Success".to_string(),
        })
    }

    #[test]
    fn action_parsing_round_trips() {
        for action in [
            FormAction::Add,
            FormAction::Edit,
            FormAction::Delete,
            FormAction::Start,
            FormAction::Stop,
            FormAction::Global,
        ] {
            assert_eq!(action.as_str().parse::<FormAction>(), Ok(action));
        }
        assert!("drop".parse::<FormAction>().is_err());
    }

    #[test]
    fn only_delete_requires_confirmation() {
        assert!(FormAction::Delete.requires_confirmation());
        assert!(!FormAction::Add.requires_confirmation());
        assert!(!FormAction::Start.requires_confirmation());
        assert!(!FormAction::Global.requires_confirmation());
    }

    #[test]
    fn reload_classification_matches_action_class() {
        assert!(FormAction::Delete.reloads_page());
        assert!(FormAction::Start.reloads_page());
        assert!(FormAction::Stop.reloads_page());
        assert!(FormAction::Global.reloads_page());
        assert!(!FormAction::Add.reloads_page());
        assert!(!FormAction::Edit.reloads_page());
    }

    #[test]
    fn field_values_are_trimmed_before_posting() {
        let context = loaded_context(None);
        let transport = StubTransport::replying(ok_response());
        let prompt = Prompt::answering(true);
        let submission = FormSubmission::new(
            FormAction::Add,
            "/client/add",
            vec![("remark".to_string(), "  web server  ".to_string())],
        );

        submit(&submission, &context, &transport, &prompt);

        let posted = transport.posted.borrow();
        assert_eq!(posted[0].1[0].1, "web server");
    }

    #[test]
    fn declined_confirmation_cancels_without_posting() {
        let context = loaded_context(Some("zh"));
        let transport = StubTransport::replying(ok_response());
        let prompt = Prompt::answering(false);
        let submission = FormSubmission::new(FormAction::Delete, "/client/del", Vec::new());

        let outcome = submit(&submission, &context, &transport, &prompt);

        assert!(matches!(outcome, SubmitOutcome::Cancelled));
        assert!(transport.posted.borrow().is_empty());
        assert_eq!(prompt.asked.borrow()[0], "确定要删除吗？");
    }

    #[test]
    fn confirmation_prompt_falls_back_when_untranslated() {
        let context = LocaleContext::default();
        let transport = StubTransport::replying(ok_response());
        let prompt = Prompt::answering(true);
        let submission = FormSubmission::new(FormAction::Delete, "/client/del", Vec::new());

        submit(&submission, &context, &transport, &prompt);

        assert_eq!(
            prompt.asked.borrow()[0],
            "Are you sure you want to delete it?"
        );
    }

    #[test]
    fn success_yields_localized_toast_and_reload_for_delete() {
        let context = loaded_context(Some("zh"));
        let transport = StubTransport::replying(ok_response());
        let prompt = Prompt::answering(true);
        let submission = FormSubmission::new(FormAction::Delete, "/client/del", Vec::new());

        match submit(&submission, &context, &transport, &prompt) {
            SubmitOutcome::Completed { toast, follow_up } => {
                assert_eq!(toast.severity(), Severity::Success);
                assert_eq!(toast.message(), "添加成功");
                assert_eq!(follow_up, Some(Navigation::Reload));
            }
            other => panic!("expected completion, got {:?}", other),
        }
    }

    #[test]
    fn success_returns_to_referrer_for_edit() {
        let context = loaded_context(None);
        let transport = StubTransport::replying(ok_response());
        let prompt = Prompt::answering(true);
        let submission = FormSubmission::new(FormAction::Edit, "/client/edit", Vec::new());

        match submit(&submission, &context, &transport, &prompt) {
            SubmitOutcome::Completed { follow_up, .. } => {
                assert_eq!(follow_up, Some(Navigation::ReturnToReferrer));
            }
            other => panic!("expected completion, got {:?}", other),
        }
    }

    #[test]
    fn non_success_payload_becomes_error_toast_without_navigation() {
        let context = loaded_context(None);
        let transport = StubTransport::replying(Ok(FormResponse {
            status: false,
            msg: "target error".to_string(),
        }));
        let prompt = Prompt::answering(true);
        let submission = FormSubmission::new(FormAction::Add, "/client/add", Vec::new());

        match submit(&submission, &context, &transport, &prompt) {
            SubmitOutcome::Completed { toast, follow_up } => {
                assert_eq!(toast.severity(), Severity::Error);
                assert_eq!(toast.message(), "target error");
                assert_eq!(follow_up, None);
            }
            other => panic!("expected completion, got {:?}", other),
        }
    }

    #[test]
    fn transport_failure_is_silent_no_response() {
        let context = loaded_context(None);
        let transport =
            StubTransport::replying(Err(Error::Transport("connection refused".to_string())));
        let prompt = Prompt::answering(true);
        let submission = FormSubmission::new(FormAction::Global, "/global", Vec::new());

        let outcome = submit(&submission, &context, &transport, &prompt);
        assert!(matches!(outcome, SubmitOutcome::NoResponse));
    }
}
