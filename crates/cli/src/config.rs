// crates/cli/src/config.rs
use crate::args::{Args, CounterArgs};
use crate::options;
pub use reserve_sizer_engine::config::{Config, FamilyConfig};
use reserve_sizer_engine::options::{self as engine_options, InputSource};

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        let input = match args.run {
            Some(program) => InputSource::Command { program, args: args.run_args },
            None if args.inputs.is_empty() => InputSource::Stdin,
            None => InputSource::Files(args.inputs),
        };

        let defaults = Self::default();
        Self {
            input,
            families: family_config_from_args(args.counters),
            class_floor: args.sizing.class_floor.unwrap_or(defaults.class_floor),
            method_floor: args.sizing.method_floor.unwrap_or(defaults.method_floor),
            format: args.output.format.into(),
            output_path: args.output.output,
        }
    }
}

/// Empty pattern lists keep the built-in counter names for that family.
fn family_config_from_args(counters: CounterArgs) -> FamilyConfig {
    let defaults = FamilyConfig::default();
    let or_default = |patterns: Vec<String>, default: Vec<String>| {
        if patterns.is_empty() { default } else { patterns }
    };

    FamilyConfig {
        files: or_default(counters.files, defaults.files),
        class_modules: or_default(counters.class_modules, defaults.class_modules),
        methods: or_default(counters.methods, defaults.methods),
    }
}

macro_rules! map_enum {
    ($from:ty, $to:ty, $($variant:ident),+ $(,)?) => {
        impl From<$from> for $to {
            fn from(f: $from) -> Self {
                match f {
                    $( <$from>::$variant => <$to>::$variant, )+
                }
            }
        }
    };
}

map_enum!(options::OutputFormat, engine_options::OutputFormat, Flags, Report, Json, Yaml);
