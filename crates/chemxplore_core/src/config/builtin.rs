//! The course the application ships with

use super::{Course, CourseBuilder, ModuleBuilder};
use crate::simulation::{ConductivityConfig, ReactionConfig, TitrationConfig};

pub(super) const STARTING_EXPERIENCE: u32 = 1250;

pub(super) fn course() -> Course {
    CourseBuilder::new()
        .starting_experience(STARTING_EXPERIENCE)
        .module(acids_bases())
        .module(reaction_types())
        .module(solution_properties())
        .build_unchecked()
}

fn acids_bases() -> ModuleBuilder {
    ModuleBuilder::titration("acids-bases", "Acids & Bases", TitrationConfig::default())
        .description("Master the pH scale and save the alien garden.")
        .progress(35)
        .intro("Concept: The pH scale measures acidity.")
        .intro("Acids (pH < 7) are sour.")
        .intro("Bases (pH > 7) are slippery.")
        .intro("Water is neutral at pH 7.")
        .question(
            "What is the pH of a neutral solution like pure water?",
            ["0", "7", "14", "1"],
            1,
            "Pure water is neutral, sitting exactly in the middle of the pH scale at 7.",
        )
        .question(
            "Which of these is a characteristic of an ACID?",
            ["Feels slippery", "Tastes bitter", "Tastes sour", "Turns litmus blue"],
            2,
            "Acids, like lemons and vinegar, are known for their sour taste.",
        )
        .question(
            "What ion do acids release in water?",
            ["OH- (Hydroxide)", "H+ (Hydrogen)", "Na+ (Sodium)", "Cl- (Chloride)"],
            1,
            "Acids increase the concentration of Hydrogen ions (H+) in a solution.",
        )
        .question(
            "If a solution has a pH of 13, it is:",
            ["Strongly Acidic", "Weakly Acidic", "Neutral", "Strongly Basic"],
            3,
            "The scale goes to 14. 13 is very high, indicating a strong base.",
        )
        .question(
            "Which common household item is a base?",
            ["Lemon Juice", "Vinegar", "Soap", "Soda"],
            2,
            "Soap and cleaning products are typically basic (alkaline).",
        )
        .question(
            "What color does blue litmus paper turn when dipped in acid?",
            ["Red", "Blue", "Green", "Yellow"],
            0,
            "Acids turn blue litmus paper red.",
        )
        .question(
            "In our simulation, what did the Zogberry bush require?",
            ["Basic soil (pH 10)", "Neutral soil (pH 7)", "Acidic soil (pH 4)", "No soil"],
            2,
            "The Zogberry thrived in an acidic environment around pH 4.",
        )
        .question(
            "What happens when you mix an equal strength acid and base?",
            ["Explosion", "Neutralization", "Freezing", "Nothing"],
            1,
            "They neutralize each other, typically forming water and a salt.",
        )
        .question(
            "Which is more acidic: pH 3 or pH 5?",
            ["pH 5", "pH 3", "They are equal", "Depends on temperature"],
            1,
            "Lower numbers on the pH scale indicate stronger acidity.",
        )
        .question(
            "The pH scale is logarithmic. A change of 1 pH unit means a concentration change of:",
            ["1x", "10x", "100x", "2x"],
            1,
            "Each step on the pH scale represents a tenfold change in acidity.",
        )
}

fn reaction_types() -> ModuleBuilder {
    ModuleBuilder::reaction("reaction-types", "Reaction Types", ReactionConfig::default())
        .description("Solve atomic logic puzzles to synthesize new compounds.")
        .intro("Concept: Atoms swap partners based on \"Activity\".")
        .intro("Rule: A single element can only kick out another if it is stronger (more reactive).")
        .question(
            "What is the general form of a Synthesis reaction?",
            ["AB → A + B", "A + B → AB", "AB + C → AC + B", "AB + CD → AD + CB"],
            1,
            "Synthesis combines two reactants into one product.",
        )
        .question(
            "In a Single Replacement reaction, what determines if a metal can replace another?",
            ["Atomic Mass", "Density", "The Activity Series", "Color"],
            2,
            "A more reactive metal (higher on activity series) replaces a less reactive one.",
        )
        .question(
            "What is the product of Mg + O2?",
            ["MgO", "Mg2O", "MgO2", "Mg+O"],
            0,
            "Magnesium is +2 and Oxygen is -2, so they form MgO.",
        )
        .question(
            "AB → A + B represents which type of reaction?",
            ["Combustion", "Synthesis", "Decomposition", "Replacement"],
            2,
            "Decomposition is breaking one compound into pieces.",
        )
        .question(
            "What is always a reactant in a Combustion reaction?",
            ["Carbon", "Nitrogen", "Oxygen", "Hydrogen"],
            2,
            "Combustion requires Oxygen to burn.",
        )
        .question(
            "If Copper is below Magnesium on the activity series, will Cu + MgSO4 react?",
            ["Yes", "No", "Only if heated", "Maybe"],
            1,
            "No, because Copper is less reactive than Magnesium, it cannot kick it out.",
        )
        .question(
            "What are the starting substances in a reaction called?",
            ["Products", "Catalysts", "Reactants", "Yields"],
            2,
            "Reactants are on the left side of the arrow.",
        )
        .question(
            "What does the arrow '→' mean in a chemical equation?",
            ["Equals", "Yields/Produces", "Destroys", "Subtracts"],
            1,
            "It indicates the direction of change, meaning 'yields'.",
        )
        .question(
            "Which type of reaction involves ions swapping partners (AB + CD → AD + CB)?",
            ["Single Replacement", "Double Replacement", "Synthesis", "Combustion"],
            1,
            "Two compounds exchange ions in a double replacement reaction.",
        )
        .question(
            "In the simulation, we used Hydrogen and Oxygen to make:",
            ["Salt", "Water", "Gold", "Acid"],
            1,
            "H2 + O2 → H2O (Water).",
        )
}

fn solution_properties() -> ModuleBuilder {
    ModuleBuilder::conductivity(
        "solution-properties",
        "Solution Properties",
        ConductivityConfig::default(),
    )
    .description("Test conductivity and solubility in the virtual lab.")
    .intro("Electrolytes: Substances like Salt that split into ions and conduct electricity.")
    .intro("Non-Electrolytes: Sugar dissolves but doesn't split. Oil doesn't even dissolve!")
    .question(
        "What is the 'Solute' in a solution?",
        ["The liquid part", "The substance being dissolved", "The container", "The heat source"],
        1,
        "The solute (like salt) is dissolved into the solvent (like water).",
    )
    .question(
        "Which of these conducted electricity in our simulation?",
        ["Sugar Water", "Salt Water", "Oil", "Pure Water"],
        1,
        "Salt dissolves into ions (electrolytes) which conduct electricity.",
    )
    .question(
        "What do we call a substance that conducts electricity when dissolved?",
        ["Insulator", "Electrolyte", "Non-electrolyte", "Metal"],
        1,
        "Electrolytes separate into charged ions that allow current to flow.",
    )
    .question(
        "Why didn't oil mix with the water?",
        ["Oil is too heavy", "Oil is polar", "Oil is non-polar", "Water is non-polar"],
        2,
        "Water is polar and oil is non-polar. 'Like dissolves like'.",
    )
    .question(
        "What happens to Sugar molecules in water?",
        ["They break into ions", "They stay as whole molecules", "They explode", "They turn into salt"],
        1,
        "Sugar dissolves but does not dissociate into ions, so it doesn't conduct.",
    )
    .question(
        "Which phrase best describes solubility?",
        ["Opposites attract", "Like dissolves like", "Heavy sinks", "Hot dissolves cold"],
        1,
        "Polar dissolves polar; non-polar dissolves non-polar.",
    )
    .question(
        "Water is known as the:",
        ["Universal Solvent", "Universal Solute", "Universal Acid", "Universal Base"],
        0,
        "Water dissolves more substances than any other liquid.",
    )
    .question(
        "If a lightbulb glows brightly during a test, the solution is a:",
        ["Weak electrolyte", "Non-electrolyte", "Strong electrolyte", "Insulator"],
        2,
        "Bright light means lots of ions moving charge effectively.",
    )
    .question(
        "Is pure distilled water a good conductor?",
        ["Yes", "No", "Sometimes", "Only when cold"],
        1,
        "Without dissolved ions, pure water is actually a poor conductor.",
    )
    .question(
        "Saturation involves:",
        ["Mixing two liquids", "Dissolving the maximum amount of solute", "Heating a liquid", "Freezing a liquid"],
        1,
        "A saturated solution holds the max amount of solute possible at that temperature.",
    )
}
