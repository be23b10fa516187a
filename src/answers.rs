use crate::model::Question;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Choice(Option<usize>), // índice de la opción marcada
    Text(String),
}

/// Respuestas del usuario, alineadas por posición con las preguntas.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerSheet {
    answers: Vec<Answer>,
}

impl AnswerSheet {
    pub fn for_questions(questions: &[Question]) -> Self {
        let answers = questions
            .iter()
            .map(|q| {
                if q.is_free_text() {
                    Answer::Text(String::new())
                } else {
                    Answer::Choice(None)
                }
            })
            .collect();
        Self { answers }
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    pub fn get(&self, idx: usize) -> Option<&Answer> {
        self.answers.get(idx)
    }

    pub fn select(&mut self, idx: usize, choice: usize) {
        if let Some(Answer::Choice(selected)) = self.answers.get_mut(idx) {
            *selected = Some(choice);
        }
    }

    pub fn set_text(&mut self, idx: usize, text: impl Into<String>) {
        if let Some(Answer::Text(current)) = self.answers.get_mut(idx) {
            *current = text.into();
        }
    }

    /// Para enlazar con `radio_value` en la UI.
    pub fn choice_mut(&mut self, idx: usize) -> Option<&mut Option<usize>> {
        match self.answers.get_mut(idx) {
            Some(Answer::Choice(selected)) => Some(selected),
            _ => None,
        }
    }

    /// Para enlazar con `TextEdit` en la UI.
    pub fn text_mut(&mut self, idx: usize) -> Option<&mut String> {
        match self.answers.get_mut(idx) {
            Some(Answer::Text(text)) => Some(text),
            _ => None,
        }
    }

    pub fn is_answered(&self, idx: usize) -> bool {
        match self.answers.get(idx) {
            Some(Answer::Choice(selected)) => selected.is_some(),
            Some(Answer::Text(text)) => !text.trim().is_empty(),
            None => false,
        }
    }

    pub fn answered_count(&self) -> usize {
        (0..self.answers.len()).filter(|i| self.is_answered(*i)).count()
    }

    /// Una cadena por pregunta, en el mismo orden; "" si no hay respuesta.
    pub fn collect(&self, questions: &[Question]) -> Vec<String> {
        questions
            .iter()
            .enumerate()
            .map(|(i, q)| match self.answers.get(i) {
                Some(Answer::Choice(Some(choice))) => q
                    .choice_list()
                    .and_then(|choices| choices.get(*choice))
                    .cloned()
                    .unwrap_or_default(),
                Some(Answer::Text(text)) => text.trim().to_string(),
                _ => String::new(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn questions() -> Vec<Question> {
        vec![
            Question::free_text("q0"),
            Question::multiple_choice("q1", &["a", "b", "c"]),
            Question::free_text("q2"),
        ]
    }

    #[test]
    fn sheet_matches_question_kinds() {
        let sheet = AnswerSheet::for_questions(&questions());
        assert_eq!(sheet.len(), 3);
        assert_eq!(sheet.get(0), Some(&Answer::Text(String::new())));
        assert_eq!(sheet.get(1), Some(&Answer::Choice(None)));
    }

    #[test]
    fn whitespace_text_is_not_answered() {
        let qs = questions();
        let mut sheet = AnswerSheet::for_questions(&qs);
        sheet.set_text(0, "   ");
        assert!(!sheet.is_answered(0));
        sheet.set_text(0, " 42 ");
        assert!(sheet.is_answered(0));
        assert_eq!(sheet.collect(&qs)[0], "42");
    }

    #[test]
    fn collect_uses_choice_value_and_keeps_order() {
        let qs = questions();
        let mut sheet = AnswerSheet::for_questions(&qs);
        sheet.set_text(2, "c");
        sheet.select(1, 1);
        assert_eq!(sheet.collect(&qs), vec!["", "b", "c"]);
    }

    #[test]
    fn mismatched_kind_is_ignored() {
        let qs = questions();
        let mut sheet = AnswerSheet::for_questions(&qs);
        sheet.select(0, 2);
        sheet.set_text(1, "texto");
        assert_eq!(sheet.answered_count(), 0);
    }
}
