use crate::{shape::Shape, Error, GenerationConfig, ModuleStyle, OutputEncoding};
use std::fmt::{self, Write};

const INTROSPECTION_RESULT_INTERFACE: &str = r"export interface IntrospectionResultData {
  __schema: {
    types: {
      kind: string;
      name: string;
      possibleTypes: {
        name: string;
      }[];
    }[];
  };
}";

const POSSIBLE_TYPES_INTERFACE: &str = r"export interface PossibleTypesResultData {
  possibleTypes: {
    [key: string]: string[]
  }
}";

/// Renders `shape` as the full contents of the artifact file.
pub fn emit(shape: &Shape, encoding: OutputEncoding, config: &GenerationConfig) -> Result<String, Error> {
    config.check(encoding)?;

    let content = shape.to_json_pretty()?;

    tracing::debug!("Emitting {encoding:?} artifact");

    match encoding {
        OutputEncoding::Data => Ok(content),
        OutputEncoding::Script => {
            let mut out = String::with_capacity(content.len() + 32);
            write_script(&mut out, &content, config.module)?;
            Ok(out)
        }
        OutputEncoding::TypedSource => {
            let mut out = String::with_capacity(content.len() * 2 + 512);
            write_typed_source(&mut out, shape, &content, config.explicit_typing)?;
            Ok(out)
        }
    }
}

fn write_script<O>(out: &mut O, content: &str, module: ModuleStyle) -> fmt::Result
where
    O: Write,
{
    let export = match module {
        ModuleStyle::EsModule => "export default",
        ModuleStyle::CommonJs => "module.exports =",
    };

    write!(out, "{export} {content}")
}

fn write_typed_source<O>(out: &mut O, shape: &Shape, content: &str, explicit_typing: bool) -> fmt::Result
where
    O: Write,
{
    let type_name = shape.type_name();

    out.write_char('\n')?;

    if explicit_typing {
        writeln!(out, "export type {type_name} = {content};")?;
    } else {
        let interface = match shape {
            Shape::V2(_) => INTROSPECTION_RESULT_INTERFACE,
            Shape::V3(_) => POSSIBLE_TYPES_INTERFACE,
        };

        writeln!(out, "{interface}")?;
    }

    writeln!(out, "const result: {type_name} = {content};")?;
    writeln!(out, "export default result;")
}
