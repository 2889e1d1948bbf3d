//! Update logic: the central message handler.

use crate::app::QuillApp;
use crate::messages::Message;

use iced::widget::text_editor::Action;
use iced::Task;

pub fn update(app: &mut QuillApp, message: Message) -> Task<Message> {
    match message {
        // ────────────────────────────────────────────────────
        // Editing
        // ────────────────────────────────────────────────────

        Message::Edit(action) => {
            // A click in the text area counts as clicking away from the panel.
            if matches!(action, Action::Click(_)) {
                app.session.dismiss_suggestions();
            }

            let is_edit = action.is_edit();
            app.content.perform(action);

            if is_edit {
                app.session.text_changed(app.content.text());
            }
            Task::none()
        }

        // ────────────────────────────────────────────────────
        // Suggestions
        // ────────────────────────────────────────────────────

        Message::RequestSuggestions => {
            let ticket = app.session.begin_fetch();
            let backend = app.backend.clone();
            let code = app.session.document().text().to_string();

            tracing::info!(
                ticket = ticket.number(),
                lines = app.session.document().line_count(),
                "running inference on current document"
            );

            Task::perform(
                async move { backend.suggest(&code).await.map_err(|e| e.to_string()) },
                move |outcome| Message::SuggestionsFetched(ticket, outcome),
            )
        }

        Message::SuggestionsFetched(ticket, outcome) => {
            app.session.finish_fetch(ticket, outcome);
            Task::none()
        }

        Message::SuggestionClicked(index) => {
            app.session.toggle_suggestion(index);
            Task::none()
        }

        Message::DismissSuggestions => {
            app.session.dismiss_suggestions();
            Task::none()
        }

        // ────────────────────────────────────────────────────
        // Theme
        // ────────────────────────────────────────────────────

        Message::CycleTheme => {
            let next = app.session.theme_name().next();
            Task::done(Message::ThemeChanged(next))
        }

        Message::ThemeChanged(theme_name) => {
            tracing::debug!(theme = theme_name.label(), "theme changed");
            app.session.set_theme(theme_name);
            Task::none()
        }
    }
}
