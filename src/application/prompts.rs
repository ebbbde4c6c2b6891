//! Prompt assembly for the three panels.
//!
//! Every assembler is a pure function from the panel's input to a [`Prompt`].
//! The text is Portuguese because the answers are shown to Portuguese-speaking
//! users as-is.

use crate::domain::nutrition::MenuSelection;
use crate::types::Prompt;

pub const ADVISOR_PERSONA: &str = "Você é um nutricionista profissional.";
pub const MEAL_PLANNER_PERSONA: &str =
    "Você é um nutricionista experiente na criação de planos alimentares.";

/// Q&A: the question is forwarded verbatim.
pub fn question_prompt(question: &str) -> Prompt {
    Prompt::new(ADVISOR_PERSONA, question)
}

/// One-day menu (café da manhã, almoço e jantar) for the selected profile.
pub fn menu_prompt(selection: &MenuSelection) -> Prompt {
    let user = format!(
        "Crie um exemplo de plano alimentar para um dia (café da manhã, almoço e jantar) \
         para uma pessoa com o seguinte perfil:\n\
         - Objetivo: {goal}\n\
         - Preferência alimentar: {preference}\n\
         - Restrição Alimentar: {restriction}\n\
         Apresente o plano de forma organizada e com sugestões de alimentos simples e acessíveis.",
        goal = selection.goal,
        preference = selection.preference,
        restriction = selection.restriction,
    );
    Prompt::new(MEAL_PLANNER_PERSONA, user)
}

/// Nutrition facts per 100g, pros and cons, and healthy substitutions for `food`.
pub fn food_analysis_prompt(food: &str) -> Prompt {
    let user = format!(
        "Analise o alimento '{food}'. Forneça as seguintes informações em tópicos:\n\
         - Informações nutricionais (calorias, proteínas, carboidratos, gorduras por 100g).\n\
         - Prós e contras do consumo.\n\
         - Sugestões de substituições saudáveis, se aplicável."
    );
    Prompt::new(ADVISOR_PERSONA, user)
}
