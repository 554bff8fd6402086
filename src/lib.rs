//  ____  ____     __        __    __  __           _
// |  _ \|  _ \ __ \ \      / /__ |  \/  | __ _ ___| |_ ___ _ __
// | |_) | |_) / _` \ \ /\ / / _ \| |\/| |/ _` / __| __/ _ \ '__|
// |  _ <|  __/ (_| |\ V  V / (_) | |  | | (_| \__ \ ||  __/ |
// |_| \_\_|   \__,_| \_/\_/ \___/|_|  |_|\__,_|___/\__\___|_|
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2025-08-04
// Version : 0.1.0
// License : Mulan PSL v2
//
// Random, memorable and PIN password generators.

pub mod configtool;
pub mod error;
pub mod form;
pub mod passgen;
pub mod vocabulary;

pub use error::{ConfigError, FormError, PassGenError, VocabularyError};
pub use passgen::{
    Generator, GeneratorKind, MemorablePasswordGenerator, PasswordGenerator, PinCodeGenerator,
    RandomPasswordGenerator,
};
pub use vocabulary::Vocabulary;
