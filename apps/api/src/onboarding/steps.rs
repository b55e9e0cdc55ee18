use serde::Serialize;

use crate::errors::GatewayError;
use crate::gateway::{Message, Role};

/// One scripted onboarding stage.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Step {
    pub index: usize,
    pub title: &'static str,
    /// Short key the system prompt pins the conversation to.
    pub context: &'static str,
    #[serde(skip)]
    pub prompt: &'static str,
}

pub static STEPS: [Step; 4] = [
    Step {
        index: 0,
        title: "Добро пожаловать в компанию",
        context: "welcome",
        prompt: "STEP: welcome\nROLE: HR-ассистент проводит первую встречу с новым сотрудником\nTASK: Познакомить с ценностями компании\nPREVIOUS_STEPS: нет\nNEXT_STEP: техника безопасности\n\nINSTRUCTIONS:\n1. Поприветствуй нового сотрудника\n2. Представь три ключевые ценности компании:\n- Взаимоуважение (свобода выражения мнений)\n- Развитие (профессиональный рост)\n- Инновации (поощрение новых идей)\n3. Укажи на портал X для подробной информации\n4. Дай контакт HR-отдела (hr@X)\n5. Задай два вопроса про ценности и ожидания",
    },
    Step {
        index: 1,
        title: "Техника безопасности",
        context: "safety",
        prompt: "STEP: safety\nROLE: HR-ассистент проводит инструктаж по безопасности\nTASK: Объяснить правила техники безопасности\nPREVIOUS_STEPS: знакомство с ценностями\nNEXT_STEP: корпоративная почта\n\nINSTRUCTIONS:\n1. Кратко поприветствуй\n2. Объясни три ключевых правила безопасности:\n- Изучение инструкции (портал Y)\n- Использование защитных средств\n- Действия при ЧП (служба Z, номер 123)\n3. Задай вопросы про важность мер и действия при неполадках",
    },
    Step {
        index: 2,
        title: "Корпоративная почта",
        context: "email",
        prompt: "STEP: email\nROLE: HR-ассистент объясняет процесс настройки почты\nTASK: Объяснить активацию корпоративной почты\nPREVIOUS_STEPS: техника безопасности\nNEXT_STEP: доступ к системам\n\nINSTRUCTIONS:\n1. Кратко поприветствуй\n2. Объясни процесс активации почты:\n- Запрос на it-support@X с ID\n- Ожидание инструкций\n- Правила безопасности\n3. Задай вопросы про безопасность и использование каналов связи",
    },
    Step {
        index: 3,
        title: "Доступ к системам",
        context: "systems",
        prompt: "STEP: systems\nROLE: HR-ассистент объясняет работу с системами\nTASK: Рассказать о доступе к корпоративным системам\nPREVIOUS_STEPS: корпоративная почта\nNEXT_STEP: завершение онбординга\n\nINSTRUCTIONS:\n1. Кратко поприветствуй\n2. Представь три системы:\n- CRM Y (клиенты)\n- Портал Z (документация)\n- Система W (задачи)\n3. Объясни получение доступа через portal-access@X\n4. Напомни про смену временного пароля\n5. Задай вопросы про важность систем и их безопасность",
    },
];

/// Replace `{context}` with the step's context key.
const ONBOARDING_SYSTEM_TEMPLATE: &str = r#"Ты HR-ассистент, проводящий онбординг нового сотрудника. Текущий этап: {context}.

ПРАВИЛА:
1. Строго следуй контексту текущего этапа
2. Не повторяй информацию из предыдущих этапов
3. Используй дружелюбный тон и обращение на "ты"
4. Один-два эмодзи на сообщение
5. Четкая структура: приветствие → информация → вопросы

ЗАПРЕЩЕНО:
- Смешивать темы разных этапов
- Повторять пройденное
- Использовать формальный язык
- Перегружать эмодзи"#;

impl Step {
    pub fn get(index: usize) -> Result<&'static Step, GatewayError> {
        STEPS.get(index).ok_or_else(|| {
            GatewayError::Validation(format!(
                "step must be between 0 and {}",
                STEPS.len() - 1
            ))
        })
    }

    /// Share of the wizard completed once this step is shown, 25.0 ..= 100.0.
    pub fn progress_percent(&self) -> f32 {
        (self.index + 1) as f32 / STEPS.len() as f32 * 100.0
    }

    pub fn next(&self) -> Option<usize> {
        let next = self.index + 1;
        (next < STEPS.len()).then_some(next)
    }

    /// System prompt, earlier step turns, then this step's scripted prompt.
    pub fn messages(&self, history: &[Message]) -> Result<Vec<Message>, GatewayError> {
        if history.iter().any(|m| m.role == Role::System) {
            return Err(GatewayError::Validation(
                "history must not contain system messages".to_string(),
            ));
        }

        let mut messages = Vec::with_capacity(history.len() + 2);
        messages.push(Message::system(
            ONBOARDING_SYSTEM_TEMPLATE.replace("{context}", self.context),
        ));
        messages.extend_from_slice(history);
        messages.push(Message::user(self.prompt));
        Ok(messages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steps_are_indexed_in_order() {
        for (i, step) in STEPS.iter().enumerate() {
            assert_eq!(step.index, i);
            assert!(step.prompt.starts_with(&format!("STEP: {}", step.context)));
        }
    }

    #[test]
    fn test_progress_and_next() {
        let first = Step::get(0).unwrap();
        assert!((first.progress_percent() - 25.0).abs() < f32::EPSILON);
        assert_eq!(first.next(), Some(1));

        let last = Step::get(3).unwrap();
        assert!((last.progress_percent() - 100.0).abs() < f32::EPSILON);
        assert_eq!(last.next(), None);
    }

    #[test]
    fn test_out_of_range_step() {
        assert!(matches!(Step::get(4), Err(GatewayError::Validation(_))));
    }

    #[test]
    fn test_messages_wrap_history() {
        let history = vec![
            Message::user(STEPS[0].prompt),
            Message::assistant("Привет! 👋 Добро пожаловать!"),
        ];
        let messages = Step::get(1).unwrap().messages(&history).unwrap();

        assert_eq!(messages.len(), 4);
        assert_eq!(messages[0].role, Role::System);
        assert!(messages[0].content.contains("Текущий этап: safety."));
        assert_eq!(&messages[1..3], history.as_slice());
        assert_eq!(messages[3], Message::user(STEPS[1].prompt));
    }

    #[test]
    fn test_prompt_is_not_serialized() {
        let json = serde_json::to_value(STEPS[2]).unwrap();
        assert_eq!(json["context"], "email");
        assert!(json.get("prompt").is_none());
    }
}
