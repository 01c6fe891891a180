//! Re-usable prompt skeletons.

/// System persona sent with every curriculum request.
pub const SYSTEM_PERSONA: &str = "Ти си искусен наставник по математика во основно образование во Република Северна Македонија. \
Подготвуваш наставни материјали за VII одделение според официјалната наставна програма. \
Пишуваш на јасен македонски јазик, прилагоден на возраста на учениците, со точни дефиниции и решени примери.";

/// Persona for canvas animation requests.
pub const ANIMATION_PERSONA: &str = "You are an expert JavaScript Canvas developer. Return only valid raw JavaScript code for the function body.";

/// Formatting policy embedded in every structured prompt. Backslashes from
/// LaTeX break the JSON reply, so the model is told to use Unicode instead.
pub const MATH_INSTRUCTION: &str = r#"
ВАЖНО ЗА ФОРМАТИРАЊЕ И JSON (СТРОГИ ПРАВИЛА):
1. Враќај ЧИТЛИВ ТЕКСТ.
2. ЗАБРАНЕТО Е КОРИСТЕЊЕ НА LATEX СИНТАКСА ($...$, \frac, \pi, \circ) во JSON вредностите.
3. ЗАБРАНЕТО Е КОРИСТЕЊЕ НА КОСИ ЦРТИ (BACKSLASHES \) бидејќи тие го рушат JSON форматот.
4. Наместо LaTeX, користи UNICODE симболи и обичен текст:
   - π (Unicode) наместо \pi
   - ° (Unicode) наместо ^\circ
   - ² (Unicode) наместо ^2
   - ³ (Unicode) наместо ^3
   - √ (Unicode) наместо \sqrt
   - Δ (Unicode) наместо \triangle
   - α, β, γ (Unicode) за агли.
   - P = 2·r·π (обичен запис).
5. За болдирање користи **текст**.
"#;

pub fn grade_label(grade: &crate::curriculum::GradeLevel) -> String {
    format!("{} одделение", grade.roman())
}
