use serde::Deserialize;

/// Image shown when PokeAPI has no front sprite for a creature.
pub const PLACEHOLDER_IMAGE_URL: &str = "https://via.placeholder.com/96";

/// A creature as the rest of the app sees it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityRecord {
    pub id: u32,
    pub display_name: String,
    pub image_url: String,
    pub categories: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct NamedResource {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PokemonListResponse {
    pub results: Vec<NamedResource>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PokemonRaw {
    id: u32,
    name: String,
    sprites: Option<SpritesRaw>,
    types: Vec<TypeSlotRaw>,
}

#[derive(Debug, Deserialize)]
struct SpritesRaw {
    front_default: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TypeSlotRaw {
    #[serde(rename = "type")]
    kind: NamedResource,
}

impl PokemonListResponse {
    pub fn into_names(self) -> Vec<String> {
        self.results.into_iter().map(|r| r.name).collect()
    }
}

impl From<PokemonRaw> for EntityRecord {
    fn from(raw: PokemonRaw) -> Self {
        let image_url = raw
            .sprites
            .and_then(|s| s.front_default)
            .unwrap_or_else(|| PLACEHOLDER_IMAGE_URL.to_string());

        Self {
            id: raw.id,
            display_name: raw.name,
            image_url,
            categories: raw.types.into_iter().map(|t| t.kind.name).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BULBASAUR: &str = r#"{
        "id": 1,
        "name": "bulbasaur",
        "height": 7,
        "sprites": {
            "front_default": "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/1.png",
            "back_default": null
        },
        "types": [
            { "slot": 1, "type": { "name": "grass", "url": "https://pokeapi.co/api/v2/type/12/" } },
            { "slot": 2, "type": { "name": "poison", "url": "https://pokeapi.co/api/v2/type/4/" } }
        ]
    }"#;

    #[test]
    fn test_detail_normalizes_into_record() {
        let raw: PokemonRaw = serde_json::from_str(BULBASAUR).unwrap();
        let record = EntityRecord::from(raw);

        assert_eq!(record.id, 1);
        assert_eq!(record.display_name, "bulbasaur");
        assert_eq!(
            record.image_url,
            "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/1.png"
        );
        // upstream order is kept
        assert_eq!(record.categories, vec!["grass", "poison"]);
    }

    #[test]
    fn test_null_sprite_falls_back_to_placeholder() {
        let json = r#"{ "id": 10001, "name": "deoxys-attack",
            "sprites": { "front_default": null }, "types": [] }"#;
        let record = EntityRecord::from(serde_json::from_str::<PokemonRaw>(json).unwrap());

        assert_eq!(record.image_url, PLACEHOLDER_IMAGE_URL);
        assert!(record.categories.is_empty());
    }

    #[test]
    fn test_missing_sprites_object_falls_back_to_placeholder() {
        let json = r#"{ "id": 7, "name": "squirtle",
            "types": [ { "slot": 1, "type": { "name": "water", "url": "" } } ] }"#;
        let record = EntityRecord::from(serde_json::from_str::<PokemonRaw>(json).unwrap());

        assert_eq!(record.image_url, PLACEHOLDER_IMAGE_URL);
        assert_eq!(record.categories, vec!["water"]);
    }

    #[test]
    fn test_missing_types_is_a_decode_error() {
        let json = r#"{ "id": 7, "name": "squirtle", "sprites": { "front_default": null } }"#;
        assert!(serde_json::from_str::<PokemonRaw>(json).is_err());
    }

    #[test]
    fn test_list_response_keeps_order() {
        let json = r#"{
            "count": 1302,
            "next": "https://pokeapi.co/api/v2/pokemon?offset=2&limit=2",
            "previous": null,
            "results": [
                { "name": "bulbasaur", "url": "https://pokeapi.co/api/v2/pokemon/1/" },
                { "name": "ivysaur", "url": "https://pokeapi.co/api/v2/pokemon/2/" }
            ]
        }"#;
        let list: PokemonListResponse = serde_json::from_str(json).unwrap();
        assert_eq!(list.into_names(), vec!["bulbasaur", "ivysaur"]);
    }
}
