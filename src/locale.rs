//! User-facing texts.
//!
//! Russian is the default locale and carries the canonical wording;
//! English mirrors it one to one.

use serde::{Deserialize, Serialize};

use crate::bmi::{Category, ValidationError};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Ru,
    En,
}

/// Static labels for the form chrome.
#[derive(Debug)]
pub struct Texts {
    pub heading: &'static str,
    pub subtitle: &'static str,
    pub form_title: &'static str,
    pub form_hint: &'static str,
    pub height_label: &'static str,
    pub height_placeholder: &'static str,
    pub height_unit: &'static str,
    pub weight_label: &'static str,
    pub weight_placeholder: &'static str,
    pub weight_unit: &'static str,
    pub calculate: &'static str,
    pub reset: &'static str,
    pub your_bmi: &'static str,
    pub key_hints: &'static str,
}

static RU: Texts = Texts {
    heading: "Frontend Mania",
    subtitle: "Калькулятор индекса массы тела",
    form_title: "Калькулятор BMI",
    form_hint: "Введите ваши данные для расчета индекса массы тела",
    height_label: "Рост",
    height_placeholder: "Например: 170",
    height_unit: "см",
    weight_label: "Вес",
    weight_placeholder: "Например: 70",
    weight_unit: "кг",
    calculate: "Рассчитать",
    reset: "Сбросить",
    your_bmi: "Ваш BMI:",
    key_hints: " Tab: Поле │ Enter: Рассчитать │ Ctrl+R: Сбросить │ Esc: Выход",
};

static EN: Texts = Texts {
    heading: "Frontend Mania",
    subtitle: "Body Mass Index calculator",
    form_title: "BMI calculator",
    form_hint: "Enter your data to calculate your body mass index",
    height_label: "Height",
    height_placeholder: "e.g. 170",
    height_unit: "cm",
    weight_label: "Weight",
    weight_placeholder: "e.g. 70",
    weight_unit: "kg",
    calculate: "Calculate",
    reset: "Reset",
    your_bmi: "Your BMI:",
    key_hints: " Tab: Field │ Enter: Calculate │ Ctrl+R: Reset │ Esc: Quit",
};

impl Locale {
    pub fn texts(self) -> &'static Texts {
        match self {
            Locale::Ru => &RU,
            Locale::En => &EN,
        }
    }

    pub fn category_label(self, category: Category) -> &'static str {
        match (self, category) {
            (Locale::Ru, Category::Underweight) => "Недостаточный вес",
            (Locale::Ru, Category::Normal) => "Нормальный вес",
            (Locale::Ru, Category::Overweight) => "Избыточный вес",
            (Locale::Ru, Category::Obese) => "Ожирение",
            (Locale::En, Category::Underweight) => "Underweight",
            (Locale::En, Category::Normal) => "Normal weight",
            (Locale::En, Category::Overweight) => "Overweight",
            (Locale::En, Category::Obese) => "Obesity",
        }
    }

    pub fn category_tip(self, category: Category) -> &'static str {
        match (self, category) {
            (Locale::Ru, Category::Underweight) => "Рекомендуется увеличить калорийность питания",
            (Locale::Ru, Category::Normal) => {
                "Отличный результат! Поддерживайте текущий образ жизни"
            }
            (Locale::Ru, Category::Overweight) => "Рекомендуется увеличить физическую активность",
            (Locale::Ru, Category::Obese) => "Рекомендуется проконсультироваться с врачом",
            (Locale::En, Category::Underweight) => "Consider increasing your caloric intake",
            (Locale::En, Category::Normal) => "Great result! Keep up your current lifestyle",
            (Locale::En, Category::Overweight) => "Consider increasing your physical activity",
            (Locale::En, Category::Obese) => "Consider consulting a doctor",
        }
    }

    pub fn validation_message(self, error: ValidationError) -> &'static str {
        match (self, error) {
            (Locale::Ru, ValidationError::HeightOutOfRange) => "Рост должен быть от 100 до 250 см",
            (Locale::Ru, ValidationError::WeightOutOfRange) => "Вес должен быть от 30 до 300 кг",
            (Locale::En, ValidationError::HeightOutOfRange) => {
                "Height must be between 100 and 250 cm"
            }
            (Locale::En, ValidationError::WeightOutOfRange) => {
                "Weight must be between 30 and 300 kg"
            }
        }
    }
}
