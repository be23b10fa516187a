use crate::answers::AnswerSheet;
use crate::model::{GeneratedTest, GradeRequest, Question, RenderMode, SessionParams};
use crate::typeset::typeset_math;
use crate::view_models::Progress;

/// Texto ya preparado para pintar (con fórmulas compuestas si procede).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayQuestion {
    pub prompt: String,
    pub choices: Vec<String>,
}

/// Estado de un test en curso: se crea una vez al recibir las preguntas.
#[derive(Debug, Clone)]
pub struct TestSession {
    pub params: SessionParams,
    pub questions: Vec<Question>,
    pub mode: RenderMode,
    pub answers: AnswerSheet,
    pub display: Vec<DisplayQuestion>,
    progress: Progress,
}

impl TestSession {
    pub fn new(params: SessionParams, test: GeneratedTest, typeset: bool) -> Self {
        let render = |s: &str| {
            if typeset {
                typeset_math(s)
            } else {
                s.to_string()
            }
        };

        let mode = match test.render_mode() {
            RenderMode::Reading { title, body } => RenderMode::Reading {
                title: render(title.as_str()),
                body: render(body.as_str()),
            },
            RenderMode::Standard => RenderMode::Standard,
        };

        let display = test
            .questions
            .iter()
            .map(|q| DisplayQuestion {
                prompt: render(q.question.as_str()),
                choices: q
                    .choice_list()
                    .map(|choices| choices.iter().map(|c| render(c.as_str())).collect())
                    .unwrap_or_default(),
            })
            .collect();

        let answers = AnswerSheet::for_questions(&test.questions);
        let mut session = Self {
            params,
            questions: test.questions,
            mode,
            answers,
            display,
            progress: Progress::default(),
        };
        session.refresh_progress();
        session
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Recalcula el progreso a partir de la hoja de respuestas.
    pub fn refresh_progress(&mut self) -> Progress {
        self.progress = Progress::new(self.answers.answered_count(), self.questions.len());
        self.progress
    }

    pub fn progress(&self) -> Progress {
        self.progress
    }

    pub fn collect_answers(&self) -> Vec<String> {
        self.answers.collect(&self.questions)
    }

    pub fn grade_request(&self) -> GradeRequest {
        GradeRequest {
            subject: self.params.subject.clone(),
            questions: self.questions.clone(),
            answers: self.collect_answers(),
        }
    }
}
