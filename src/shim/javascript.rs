use super::{BODY_PROPERTY, KIND_PROPERTY, MODULE_BLOCK_KIND, TEXT_JAVASCRIPT};

/// File name the shim is served under, see `Options::shim_specifier`.
pub const SHIM_FILE_NAME: &str = "module-blocks-shim.js";

const TEMPLATE: &str = r#"export const KIND_PROPERTY = @KIND_PROPERTY@;
export const MODULE_BLOCK_KIND = @MODULE_BLOCK_KIND@;

export class @RUNTIME@ {
  #url = null;

  constructor(body) {
    if (typeof body !== "string") {
      throw new TypeError("module block body must be a string");
    }
    this[KIND_PROPERTY] = MODULE_BLOCK_KIND;
    this[@BODY@] = body;
  }

  get url() {
    if (this.#url === null) {
      const blob = new Blob([this[@BODY@]], { type: @CONTENT_TYPE@ });
      this.#url = URL.createObjectURL(blob);
    }
    return this.#url;
  }

  toString() {
    return `module { ${this[@BODY@]} }`;
  }

  [Symbol.toPrimitive]() {
    return this.url;
  }

  static fixup(value) {
    if (value instanceof @RUNTIME@) {
      return value;
    }
    if (typeof value !== "object" || value === null) {
      return value;
    }
    if (value[KIND_PROPERTY] === MODULE_BLOCK_KIND && typeof value[@BODY@] === "string") {
      return new @RUNTIME@(value[@BODY@]);
    }
    return value;
  }
}
"#;

/// Source of the shim module exporting the runtime class as `runtime_name`.
/// Compiled programs import the class by that name, the tag constants are the ones
/// the Rust model uses.
pub fn generate_shim(runtime_name: &str) -> String {
    TEMPLATE
        .replace("@KIND_PROPERTY@", &quote(KIND_PROPERTY))
        .replace("@MODULE_BLOCK_KIND@", &quote(MODULE_BLOCK_KIND))
        .replace("@BODY@", &quote(BODY_PROPERTY))
        .replace("@CONTENT_TYPE@", &quote(TEXT_JAVASCRIPT))
        .replace("@RUNTIME@", runtime_name)
}

fn quote(s: &str) -> String {
    serde_json::Value::from(s).to_string()
}
