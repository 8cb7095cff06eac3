use rand::Rng;
use zeroize::Zeroizing;

use crate::{
    error::{Error, Result},
    random_string::random_string,
    settings::Settings,
};

/// Length used by the symbol and lower letter classes when no length is given, these two
/// classes don't follow the default length from the settings.
pub const FIXED_CLASS_LENGTH: usize = 12;

/// Operations shared by everything that can produce a password.
pub trait PasswordGenerator {
    /// The number of characters each generated password has.
    fn length(&self) -> usize;

    /// Generates a password, drawing all randomness from `rng`.
    fn generate_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<String>;

    /// Generates a password with the thread local random generator.
    fn generate(&self) -> Result<String> {
        self.generate_with(&mut rand::thread_rng())
    }
}

/// The kinds of characters a class generator can produce.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CharClass {
    Digit,
    Symbol,
    UpperLetter,
    LowerLetter,
}

impl CharClass {
    pub fn alphabet(&self) -> &'static str {
        match self {
            CharClass::Digit => "0123456789",
            CharClass::Symbol => "-/.;#@%)*",
            // J, Q, U, V, W, X, Y and Z are left out
            CharClass::UpperLetter => "ABCDEFGHKLMNIOPRST",
            CharClass::LowerLetter => "abcdefghklmnioprst",
        }
    }

    pub fn default_length(&self, settings: &Settings) -> usize {
        match self {
            CharClass::Digit | CharClass::UpperLetter => settings.default_length(),
            CharClass::Symbol | CharClass::LowerLetter => FIXED_CLASS_LENGTH,
        }
    }
}

/// Produces random strings from the alphabet of a single character class.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassGenerator {
    class: CharClass,
    length: usize,
}

impl ClassGenerator {
    /// A generator with the class default length.
    pub fn new(class: CharClass, settings: &Settings) -> Self {
        Self {
            class,
            length: class.default_length(settings),
        }
    }

    pub fn with_length(class: CharClass, length: usize) -> Result<Self> {
        if length == 0 {
            return Err(Error::InvalidConfiguration(0));
        }
        Ok(Self { class, length })
    }

    pub fn digit(settings: &Settings) -> Self {
        Self::new(CharClass::Digit, settings)
    }

    pub fn symbol(settings: &Settings) -> Self {
        Self::new(CharClass::Symbol, settings)
    }

    pub fn upper_letter(settings: &Settings) -> Self {
        Self::new(CharClass::UpperLetter, settings)
    }

    pub fn lower_letter(settings: &Settings) -> Self {
        Self::new(CharClass::LowerLetter, settings)
    }

    pub fn class(&self) -> CharClass {
        self.class
    }

    pub fn alphabet(&self) -> &'static str {
        self.class.alphabet()
    }
}

impl PasswordGenerator for ClassGenerator {
    fn length(&self) -> usize {
        self.length
    }

    fn generate_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<String> {
        random_string(rng, self.length, self.alphabet())
    }
}

/// Combines class generators into passwords that contain at least one character of every class.
///
/// A password is built from one fragment per class. The start of the password is filler drawn
/// from all fragments together, after it follows one character from each fragment, in the
/// order the classes were added.
#[derive(Clone, Debug, Default)]
pub struct CompositeGenerator {
    generators: Vec<ClassGenerator>,
}

impl CompositeGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Digits, symbols, upper and lower letters, with their default lengths.
    pub fn standard(settings: &Settings) -> Self {
        let mut composite = Self::new();
        composite.add(ClassGenerator::digit(settings));
        composite.add(ClassGenerator::symbol(settings));
        composite.add(ClassGenerator::upper_letter(settings));
        composite.add(ClassGenerator::lower_letter(settings));
        composite
    }

    pub fn add(&mut self, generator: ClassGenerator) {
        self.generators.push(generator);
    }

    pub fn generators(&self) -> &[ClassGenerator] {
        &self.generators
    }
}

impl FromIterator<ClassGenerator> for CompositeGenerator {
    fn from_iter<I: IntoIterator<Item = ClassGenerator>>(iter: I) -> Self {
        Self {
            generators: iter.into_iter().collect(),
        }
    }
}

impl PasswordGenerator for CompositeGenerator {
    fn length(&self) -> usize {
        self.generators
            .iter()
            .map(PasswordGenerator::length)
            .max()
            .unwrap_or(0)
    }

    fn generate_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<String> {
        let target = self.length();
        let classes = self.generators.len();
        if target <= classes {
            return Err(Error::InsufficientLength { target, classes });
        }
        log::debug!("generating password of length {target} from {classes} character classes");

        let fragments = self
            .generators
            .iter()
            .map(|generator| generator.generate_with(rng).map(Zeroizing::new))
            .collect::<Result<Vec<_>>>()?;
        let pool: Zeroizing<String> =
            Zeroizing::new(fragments.iter().map(|f| f.as_str()).collect());

        let mut password = random_string(rng, target - classes, &pool)?;
        for fragment in &fragments {
            password.push_str(&random_string(rng, 1, fragment)?);
        }
        Ok(password)
    }
}

#[cfg(test)]
#[path = "tests/password_generator.rs"]
mod password_generator_tests;
