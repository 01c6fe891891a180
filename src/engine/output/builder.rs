//! Turns a topic into a ready-to-send [`GenerationRequest`] per document type.

use crate::curriculum::GradeLevel;
use crate::engine::output::schema::quiz_schema;
use crate::engine::output::templates::{
    grade_label, ANIMATION_PERSONA, MATH_INSTRUCTION, SYSTEM_PERSONA,
};
use crate::llm::{GenerationError, GenerationRequest, ResponseFormat, Result};

/// Number of questions asked for in one quiz.
pub const QUIZ_QUESTION_COUNT: usize = 5;

pub struct PromptBuilder {
    model: String,
}

impl PromptBuilder {
    pub fn new(model: &str) -> Self {
        Self {
            model: model.to_string(),
        }
    }

    fn request(&self, system: &str, prompt: String, format: ResponseFormat) -> GenerationRequest {
        GenerationRequest {
            model: self.model.clone(),
            system_instruction: system.to_string(),
            prompt,
            format,
        }
    }

    pub fn lesson(&self, topic: &str, grade: GradeLevel) -> Result<GenerationRequest> {
        let topic = require_topic(topic)?;
        let prompt = format!(
            r#"
Креирај лекција за {grade} на тема: "{topic}".
Лекцијата треба да биде интерактивна и разбирлива.

Структура:
1. Наслов.
2. Што ќе научиме (3 цели).
3. Главен дел (Дефиниции, Својства, Примери).
4. Задача за вежбање.

{policy}

Врати JSON:
{{
  "title": "String",
  "objectives": ["String", "String", "String"],
  "content": "String (Markdown + Unicode Math)"
}}
"#,
            grade = grade_label(&grade),
            topic = topic,
            policy = MATH_INSTRUCTION,
        );
        Ok(self.request(SYSTEM_PERSONA, prompt, ResponseFormat::Json))
    }

    pub fn scenario(&self, topic: &str) -> Result<GenerationRequest> {
        let topic = require_topic(topic)?;
        let prompt = format!(
            r#"
Креирај детално Сценарио за час по математика за {grade} на тема: "{topic}".
Пополни ги полињата за да одговараат на официјалниот формат за подготовки.

{policy}

Биди конкретен, методичен и јасен.
Врати JSON формат со следните полиња (сите се string):
- topic: Насловот на темата.
- standards: Стандарди за оценување (Користи булети).
- content: Содржина и нови поими кои се воведуваат.
- introActivity: Опис на воведната активност (околу 10 мин).
- mainActivity: Опис на главните активности, работа во групи, задачи (околу 20-25 мин). Користи Unicode за формули.
- finalActivity: Завршна активност, рефлексија и домашна работа (околу 10 мин).
- resources: Потребни средства и материјали.
- assessment: Начини на следење на напредокот.
"#,
            grade = grade_label(&GradeLevel::VII),
            topic = topic,
            policy = MATH_INSTRUCTION,
        );
        Ok(self.request(SYSTEM_PERSONA, prompt, ResponseFormat::Json))
    }

    pub fn quiz(&self, topic: &str, grade: GradeLevel) -> Result<GenerationRequest> {
        let topic = require_topic(topic)?;
        let prompt = format!(
            r#"
Генерирај {count} прашања за геометрија, тема: "{topic}" ({grade}).
Прашањата треба да бидат соодветни за возраста.
{policy}
"#,
            count = QUIZ_QUESTION_COUNT,
            topic = topic,
            grade = grade_label(&grade),
            policy = MATH_INSTRUCTION,
        );
        Ok(self.request(
            SYSTEM_PERSONA,
            prompt,
            ResponseFormat::JsonSchema(quiz_schema()),
        ))
    }

    pub fn worksheet(&self, topic: &str) -> Result<GenerationRequest> {
        let topic = require_topic(topic)?;
        let prompt = format!(
            r#"
Креирај Работен Лист (Worksheet) за ученици по математика ({grade}).
Тема: "{topic}".

Содржина:
- 5 текстуални задачи со различно ниво на тежина (од полесни кон потешки).
- Задачите треба да се јасни и прецизни.
- Не вклучувај решенија, само задачи за вежбање.

Формат:
Врати го текстот директно во Markdown формат. Користи наслови, bold текст и нумерирани листи.
Користи Unicode за математички симболи (не LaTeX).
"#,
            grade = grade_label(&GradeLevel::VII),
            topic = topic,
        );
        Ok(self.request(SYSTEM_PERSONA, prompt, ResponseFormat::Text))
    }

    pub fn animation(&self, description: &str) -> Result<GenerationRequest> {
        let description = require_topic(description)?;
        let prompt = format!(
            r#"
Write a JavaScript function body for an HTML5 Canvas animation about: "{description}".

The function signature must be:
function draw(ctx, width, height, frame) {{ ... }}

Parameters:
- ctx: CanvasRenderingContext2D
- width: Number (canvas width)
- height: Number (canvas height)
- frame: Number (incrementing frame counter for animation)

Requirements:
1. Clear the canvas at the start: ctx.clearRect(0, 0, width, height);
2. Draw geometry shapes clearly (lines, circles, triangles).
3. Use 'frame' to create movement (e.g. rotation, translation).
4. Use Math.sin/Math.cos for smooth geometric animations.
5. Set stroke styles and fill styles (use bright colors).
6. Do NOT include the function declaration wrapper, only the body code.
7. Do NOT use external libraries. Use standard Canvas API.

Example output format (string only):
ctx.clearRect(0, 0, width, height);
ctx.beginPath();
ctx.arc(width/2, height/2, 50 + Math.sin(frame/20)*10, 0, Math.PI*2);
ctx.stroke();
"#,
            description = description,
        );
        Ok(self.request(ANIMATION_PERSONA, prompt, ResponseFormat::Text))
    }
}

fn require_topic(topic: &str) -> Result<&str> {
    let topic = topic.trim();
    if topic.is_empty() {
        return Err(GenerationError::EmptyTopic);
    }
    Ok(topic)
}
