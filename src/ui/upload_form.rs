// SPDX-License-Identifier: MPL-2.0
//! Upload form modal: file picker, title/description fields, submit.
//!
//! The component owns the [`Draft`] for the open form. Picking a file
//! immediately validates it and, when it passes, hands it to the hosting
//! collaborator; the hosted URL lands back in the draft. Submission is
//! blocked until every field rule passes and the hosted URL exists.
//!
//! The state is dropped when the modal closes, which is what destroys the
//! draft. A failed submission keeps the form open with the draft intact
//! so the user can retry.

use crate::api::{ApiClient, ApiError, HostError, ImageHost, ImageRecord};
use crate::i18n::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::notifications::Notification;
use crate::ui::styles;
use crate::upload::validate::{self, Field};
use crate::upload::{Draft, FieldError, SelectedFile};
use iced::widget::image::Handle;
use iced::widget::{button, text, text_input, Column, Container, Image, Text};
use iced::{alignment, ContentFit, Element, Length, Task, Theme};
use std::path::PathBuf;

const FILE_AREA_HEIGHT: f32 = 160.0;

/// Progress of the hosting upload for the currently selected file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum HostingPhase {
    /// No file selected, or the selection failed validation.
    #[default]
    Idle,
    /// The file is on its way to the hosting collaborator.
    Uploading,
    /// The draft carries a hosted URL.
    Hosted,
    /// The upload failed; picking the file again retries.
    Failed,
}

/// Upload form state, alive only while the modal is open.
#[derive(Debug, Default)]
pub struct State {
    draft: Draft,
    /// Local preview of the picked file, shown before hosting finishes.
    preview: Option<Handle>,
    errors: Vec<FieldError>,
    hosting: HostingPhase,
    /// Discriminates results of superseded host uploads.
    upload_seq: u64,
    submitting: bool,
}

/// Messages handled by the form.
#[derive(Debug, Clone)]
pub enum Message {
    PickFile,
    FilePicked(Option<PathBuf>),
    FileInspected(Result<SelectedFile, String>),
    HostUploadFinished {
        seq: u64,
        result: Result<String, HostError>,
    },
    TitleChanged(String),
    DescriptionChanged(String),
    Submit,
    SubmitFinished(Result<ImageRecord, ApiError>),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// Show a toast; the form stays open.
    Notify(Notification),
    /// The record was created: toast success, invalidate the list cache,
    /// and close the modal (destroying the draft).
    Created(ImageRecord),
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    #[must_use]
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Processes a form message.
    ///
    /// `api` and `host` are borrowed only to clone what the spawned tasks
    /// need; the returned task owns everything.
    pub fn update<H: ImageHost>(
        &mut self,
        message: Message,
        api: &ApiClient,
        host: &H,
    ) -> (Event, Task<Message>) {
        match message {
            Message::PickFile => (Event::None, pick_file_task()),

            Message::FilePicked(None) => (Event::None, Task::none()),
            Message::FilePicked(Some(path)) => (Event::None, inspect_file_task(path)),

            Message::FileInspected(Err(err)) => {
                log::warn!(target: "upload", "could not inspect picked file: {err}");
                (
                    Event::Notify(Notification::error("notification-file-error")),
                    Task::none(),
                )
            }
            Message::FileInspected(Ok(file)) => self.handle_file_inspected(file, host),

            Message::HostUploadFinished { seq, result } => self.handle_host_upload(seq, result),

            Message::TitleChanged(title) => {
                self.draft.title = title;
                self.revalidate_field(Field::Title);
                (Event::None, Task::none())
            }
            Message::DescriptionChanged(description) => {
                self.draft.description = description;
                self.revalidate_field(Field::Description);
                (Event::None, Task::none())
            }

            Message::Submit => self.handle_submit(api),

            Message::SubmitFinished(Ok(record)) => {
                self.submitting = false;
                (Event::Created(record), Task::none())
            }
            Message::SubmitFinished(Err(err)) => {
                log::warn!(target: "upload", "create call failed: {err}");
                self.submitting = false;
                // The draft is preserved so the user can retry.
                (
                    Event::Notify(Notification::error("notification-submit-error")),
                    Task::none(),
                )
            }
        }
    }

    fn handle_file_inspected<H: ImageHost>(
        &mut self,
        file: SelectedFile,
        host: &H,
    ) -> (Event, Task<Message>) {
        // A new selection supersedes any previous file and hosted URL.
        self.draft.hosted_url = None;
        self.preview = None;

        if let Some(error) = validate::validate_file(Some(&file)) {
            self.draft.file = None;
            self.hosting = HostingPhase::Idle;
            self.set_field_error(Field::Image, Some(error));
            return (Event::None, Task::none());
        }

        let path = file.path.clone();
        self.preview = Some(Handle::from_path(&path));
        self.draft.file = Some(file);
        self.set_field_error(Field::Image, None);
        self.hosting = HostingPhase::Uploading;
        self.upload_seq += 1;

        let seq = self.upload_seq;
        let upload = host.upload(path);
        let task = Task::perform(upload, move |result| Message::HostUploadFinished {
            seq,
            result,
        });
        (Event::None, task)
    }

    fn handle_host_upload(
        &mut self,
        seq: u64,
        result: Result<String, HostError>,
    ) -> (Event, Task<Message>) {
        if seq != self.upload_seq {
            // Result of an upload the user already replaced with a new file.
            return (Event::None, Task::none());
        }

        match result {
            Ok(url) => {
                self.draft.hosted_url = Some(url);
                self.hosting = HostingPhase::Hosted;
                (Event::None, Task::none())
            }
            Err(err) => {
                log::warn!(target: "upload", "hosting upload failed: {err}");
                self.hosting = HostingPhase::Failed;
                (
                    Event::Notify(Notification::error("notification-host-error")),
                    Task::none(),
                )
            }
        }
    }

    fn handle_submit(&mut self, api: &ApiClient) -> (Event, Task<Message>) {
        if self.submitting {
            return (Event::None, Task::none());
        }

        // 1. Field rules; failures never reach the network.
        self.errors = validate::validate(&self.draft);
        if !self.errors.is_empty() {
            return (Event::None, Task::none());
        }

        // 2. The image must be hosted before a record can point at it.
        let body = match self.draft.to_new_image() {
            Some(body) => body,
            None => {
                return (
                    Event::Notify(Notification::error("notification-url-missing")),
                    Task::none(),
                );
            }
        };

        // 3. Exactly one create call per accepted submission.
        self.submitting = true;
        let api = api.clone();
        let task = Task::perform(
            async move { api.create_image(&body).await },
            Message::SubmitFinished,
        );
        (Event::None, task)
    }

    /// Re-runs a single field's rules, but only while the field is already
    /// flagged, so typing clears the message as soon as the value is valid.
    fn revalidate_field(&mut self, field: Field) {
        if validate::error_for(&self.errors, field).is_none() {
            return;
        }
        let error = match field {
            Field::Image => validate::validate_file(self.draft.file.as_ref()),
            Field::Title => validate::validate_title(&self.draft.title),
            Field::Description => validate::validate_description(&self.draft.description),
        };
        self.set_field_error(field, error);
    }

    fn set_field_error(&mut self, field: Field, error: Option<FieldError>) {
        self.errors.retain(|e| e.field != field);
        if let Some(error) = error {
            self.errors.push(error);
        }
    }

    /// Renders the form surface.
    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let heading = Text::new(i18n.tr("form-heading")).size(typography::TITLE_MD);

        let mut column = Column::new()
            .spacing(spacing::MD)
            .push(heading)
            .push(self.file_area(i18n));

        if let Some(error) = validate::error_for(&self.errors, Field::Image) {
            column = column.push(field_error_text(i18n.tr(error.message_key)));
        }

        let title_input = text_input(&i18n.tr("form-title-placeholder"), &self.draft.title)
            .on_input(Message::TitleChanged)
            .padding(spacing::SM)
            .size(typography::BODY_LG);
        column = column.push(title_input);
        if let Some(error) = validate::error_for(&self.errors, Field::Title) {
            column = column.push(field_error_text(i18n.tr(error.message_key)));
        }

        let description_input = text_input(
            &i18n.tr("form-description-placeholder"),
            &self.draft.description,
        )
        .on_input(Message::DescriptionChanged)
        .padding(spacing::SM)
        .size(typography::BODY_LG);
        column = column.push(description_input);
        if let Some(error) = validate::error_for(&self.errors, Field::Description) {
            column = column.push(field_error_text(i18n.tr(error.message_key)));
        }

        let submit_label = Text::new(i18n.tr("form-submit-button"));
        let submit = if self.submitting {
            button(submit_label)
                .width(Length::Fill)
                .padding(spacing::SM)
                .style(styles::button::disabled())
        } else {
            button(submit_label)
                .width(Length::Fill)
                .padding(spacing::SM)
                .on_press(Message::Submit)
                .style(styles::button::primary)
        };
        column = column.push(submit);

        Container::new(column)
            .padding(spacing::LG)
            .width(Length::Fixed(sizing::FORM_WIDTH))
            .style(styles::container::panel)
            .into()
    }

    /// The picker area: local preview once a file is selected, otherwise a
    /// button opening the file dialog.
    fn file_area<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let inner: Element<'a, Message> = match (&self.preview, self.hosting) {
            (Some(handle), _) => {
                let picture = Image::new(handle.clone())
                    .width(Length::Fill)
                    .height(Length::Fixed(FILE_AREA_HEIGHT))
                    .content_fit(ContentFit::Contain);

                let status_key = match self.hosting {
                    HostingPhase::Uploading => Some("form-file-uploading"),
                    HostingPhase::Hosted => Some("form-file-ready"),
                    _ => None,
                };

                let mut stack = Column::new().spacing(spacing::XXS).push(picture);
                if let Some(key) = status_key {
                    stack = stack.push(
                        Text::new(i18n.tr(key))
                            .size(typography::CAPTION)
                            .style(|theme: &Theme| text::Style {
                                color: Some(theme.extended_palette().background.strong.color),
                            }),
                    );
                }
                stack.into()
            }
            _ => button(
                Container::new(Text::new(i18n.tr("form-file-button")))
                    .width(Length::Fill)
                    .height(Length::Fixed(FILE_AREA_HEIGHT))
                    .align_x(alignment::Horizontal::Center)
                    .align_y(alignment::Vertical::Center),
            )
            .width(Length::Fill)
            .on_press(Message::PickFile)
            .style(styles::button::surface)
            .into(),
        };

        Container::new(inner).width(Length::Fill).into()
    }
}

fn field_error_text<'a>(message: String) -> Element<'a, Message> {
    Text::new(message)
        .size(typography::CAPTION)
        .style(|_theme: &Theme| text::Style {
            color: Some(palette::ERROR_500),
        })
        .into()
}

fn pick_file_task() -> Task<Message> {
    Task::perform(
        async {
            rfd::AsyncFileDialog::new()
                .add_filter("Images", &["png", "jpg", "jpeg", "gif"])
                .pick_file()
                .await
                .map(|handle| handle.path().to_path_buf())
        },
        Message::FilePicked,
    )
}

fn inspect_file_task(path: PathBuf) -> Task<Message> {
    Task::perform(
        async move {
            let metadata = tokio::fs::metadata(&path)
                .await
                .map_err(|e| e.to_string())?;
            let mime = mime_guess::from_path(&path)
                .first_or_octet_stream()
                .essence_str()
                .to_string();
            Ok(SelectedFile {
                path,
                size_bytes: metadata.len(),
                mime,
            })
        },
        Message::FileInspected,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::future::{ready, Future};

    /// Host stub: resolves instantly with a fixed answer.
    struct StubHost {
        result: Result<String, HostError>,
    }

    impl StubHost {
        fn ok(url: &str) -> Self {
            Self {
                result: Ok(url.to_string()),
            }
        }

        fn failing() -> Self {
            Self {
                result: Err(HostError::Network("offline".into())),
            }
        }
    }

    impl ImageHost for StubHost {
        fn upload(
            &self,
            _path: PathBuf,
        ) -> impl Future<Output = Result<String, HostError>> + Send + 'static {
            ready(self.result.clone())
        }
    }

    fn api() -> ApiClient {
        ApiClient::new("http://gallery.local:3000")
    }

    fn png_file() -> SelectedFile {
        SelectedFile {
            path: PathBuf::from("/tmp/image.png"),
            size_bytes: 1024,
            mime: "image/png".into(),
        }
    }

    fn submit(state: &mut State) -> Event {
        let (event, _task) = state.update(Message::Submit, &api(), &StubHost::ok("u"));
        event
    }

    #[test]
    fn invalid_draft_blocks_submission_with_field_errors() {
        let mut state = State::new();

        let event = submit(&mut state);

        assert!(matches!(event, Event::None));
        assert!(!state.is_submitting());
        assert_eq!(state.errors().len(), 3);
    }

    #[test]
    fn valid_fields_without_hosted_url_notify_missing_url() {
        let mut state = State::new();
        state.draft.file = Some(png_file());
        state.draft.title = "sunset".into();
        state.draft.description = "over the bay".into();

        let event = submit(&mut state);

        match event {
            Event::Notify(notification) => {
                assert_eq!(notification.message_key(), "notification-url-missing");
            }
            _ => panic!("expected missing-url notification"),
        }
        assert!(!state.is_submitting());
    }

    #[test]
    fn hosted_draft_submits_exactly_once() {
        let mut state = State::new();
        state.draft.file = Some(png_file());
        state.draft.title = "sunset".into();
        state.draft.description = "over the bay".into();
        state.draft.hosted_url = Some("https://host.example/a.png".into());

        let event = submit(&mut state);
        assert!(matches!(event, Event::None));
        assert!(state.is_submitting());

        // A second trigger while the call is in flight is ignored.
        let event = submit(&mut state);
        assert!(matches!(event, Event::None));
    }

    #[test]
    fn oversized_file_sets_image_error_and_clears_selection() {
        let mut state = State::new();
        let file = SelectedFile {
            size_bytes: validate::MAX_IMAGE_BYTES,
            ..png_file()
        };

        let (event, _task) =
            state.update(Message::FileInspected(Ok(file)), &api(), &StubHost::ok("u"));

        assert!(matches!(event, Event::None));
        assert!(state.draft().file.is_none());
        let error = validate::error_for(state.errors(), Field::Image).expect("image error set");
        assert_eq!(error.message_key, "validation-image-too-large");
    }

    #[test]
    fn accepted_file_starts_hosting_upload() {
        let mut state = State::new();

        let (event, _task) = state.update(
            Message::FileInspected(Ok(png_file())),
            &api(),
            &StubHost::ok("u"),
        );

        assert!(matches!(event, Event::None));
        assert!(state.draft().file.is_some());
        assert!(state.draft().hosted_url.is_none());
        assert_eq!(state.hosting, HostingPhase::Uploading);
    }

    #[test]
    fn host_result_populates_hosted_url() {
        let mut state = State::new();
        state.update(
            Message::FileInspected(Ok(png_file())),
            &api(),
            &StubHost::ok("u"),
        );

        let seq = state.upload_seq;
        state.update(
            Message::HostUploadFinished {
                seq,
                result: Ok("https://host.example/a.png".into()),
            },
            &api(),
            &StubHost::ok("u"),
        );

        assert_eq!(
            state.draft().hosted_url.as_deref(),
            Some("https://host.example/a.png")
        );
        assert_eq!(state.hosting, HostingPhase::Hosted);
    }

    #[test]
    fn stale_host_result_is_ignored() {
        let mut state = State::new();
        state.update(
            Message::FileInspected(Ok(png_file())),
            &api(),
            &StubHost::ok("u"),
        );
        let stale_seq = state.upload_seq;

        // User picks another file before the first upload finishes.
        state.update(
            Message::FileInspected(Ok(png_file())),
            &api(),
            &StubHost::ok("u"),
        );

        state.update(
            Message::HostUploadFinished {
                seq: stale_seq,
                result: Ok("https://host.example/old.png".into()),
            },
            &api(),
            &StubHost::ok("u"),
        );

        assert!(state.draft().hosted_url.is_none());
        assert_eq!(state.hosting, HostingPhase::Uploading);
    }

    #[test]
    fn failed_host_upload_notifies_and_keeps_url_empty() {
        let mut state = State::new();
        state.update(
            Message::FileInspected(Ok(png_file())),
            &api(),
            &StubHost::failing(),
        );

        let seq = state.upload_seq;
        let (event, _task) = state.update(
            Message::HostUploadFinished {
                seq,
                result: Err(HostError::Network("offline".into())),
            },
            &api(),
            &StubHost::failing(),
        );

        match event {
            Event::Notify(notification) => {
                assert_eq!(notification.message_key(), "notification-host-error");
            }
            _ => panic!("expected host-error notification"),
        }
        assert!(state.draft().hosted_url.is_none());
    }

    #[test]
    fn failed_submission_preserves_draft() {
        let mut state = State::new();
        state.draft.file = Some(png_file());
        state.draft.title = "sunset".into();
        state.draft.description = "over the bay".into();
        state.draft.hosted_url = Some("https://host.example/a.png".into());
        submit(&mut state);

        let (event, _task) = state.update(
            Message::SubmitFinished(Err(ApiError::Network("offline".into()))),
            &api(),
            &StubHost::ok("u"),
        );

        match event {
            Event::Notify(notification) => {
                assert_eq!(notification.message_key(), "notification-submit-error");
            }
            _ => panic!("expected submit-error notification"),
        }
        assert!(!state.is_submitting());
        assert_eq!(state.draft().title, "sunset");
        assert!(state.draft().hosted_url.is_some());
    }

    #[test]
    fn successful_submission_emits_created() {
        use chrono::Utc;

        let mut state = State::new();
        state.draft.hosted_url = Some("https://host.example/a.png".into());

        let record = ImageRecord {
            id: "fresh".into(),
            title: "sunset".into(),
            description: "over the bay".into(),
            url: "https://host.example/a.png".into(),
            created_at: Utc::now(),
        };
        let (event, _task) = state.update(
            Message::SubmitFinished(Ok(record)),
            &api(),
            &StubHost::ok("u"),
        );

        match event {
            Event::Created(record) => assert_eq!(record.id, "fresh"),
            _ => panic!("expected Created event"),
        }
    }

    #[test]
    fn typing_clears_a_flagged_field() {
        let mut state = State::new();
        submit(&mut state); // flags title as required

        assert!(validate::error_for(state.errors(), Field::Title).is_some());

        state.update(
            Message::TitleChanged("ab".into()),
            &api(),
            &StubHost::ok("u"),
        );
        assert!(validate::error_for(state.errors(), Field::Title).is_none());
    }

    #[test]
    fn form_view_renders_in_every_phase() {
        let i18n = I18n::default();
        let mut state = State::new();
        let _empty = state.view(&i18n);
        drop(_empty);

        submit(&mut state); // with field errors
        let _with_errors = state.view(&i18n);
    }
}
