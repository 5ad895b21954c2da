//! Word Tables
//!
//! Embedded name lists (INE, 2010: most common given names and surnames in
//! Spain) plus [`WordTables`], the validated set a generator samples from.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{GeneratorError, Result};

/// Male given names, most frequent first
pub const MALE_GIVEN_NAMES: &[&str] = &[
    "Antonio", "Jose", "Manuel", "Francisco", "Juan", "David", "Jose Antonio", "Jose Luis",
    "Jesus", "Javier", "Francisco Javier", "Carlos", "Daniel", "Miguel", "Rafael", "Pedro",
    "Jose Manuel", "Angel", "Alejandro", "Miguel Angel", "Jose Maria", "Fernando", "Luis",
    "Sergio", "Pablo", "Jorge", "Alberto", "Juan Carlos", "Juan Jose", "Ramon", "Enrique",
    "Vicente", "Juan Antonio", "Diego", "Raul", "Alvaro", "Joaquin", "Adrian", "Andres",
    "Ivan", "Oscar", "Ruben", "Santiago", "Juan Manuel", "Eduardo", "Victor", "Roberto",
    "Jaime", "Francisco Jose", "Alfonso", "Ignacio", "Salvador", "Ricardo", "Emilio",
    "Jordi", "Mario", "Julian", "Julio", "Marcos", "Tomas", "Agustin", "Guillermo",
    "Gabriel", "Jose Miguel", "Felix", "Jose Ramon", "Mohamed", "Joan", "Gonzalo", "Marc",
    "Mariano", "Domingo", "Josep", "Ismael", "Cristian", "Juan Francisco", "Alfredo",
    "Sebastian", "Felipe", "Nicolas", "Jose Carlos", "Samuel", "Cesar", "Martin",
    "Jose Angel", "Gregorio", "Jose Ignacio", "Aitor", "Victor Manuel", "Hugo",
    "Luis Miguel", "Hector", "Jose Francisco", "Lorenzo", "Juan Luis", "Cristobal",
    "Esteban", "Albert", "Xavier", "Eugenio", "Antonio Jose", "Arturo", "Rodrigo", "Iker",
    "Borja", "Alex", "Valentin", "Jose Javier", "Jesus Maria", "Juan Miguel", "Jaume",
    "German", "Antonio Jesus", "Francisco Manuel", "Jonathan", "Adolfo", "Pedro Jose",
    "Jose Vicente", "Benito", "Lucas", "Isaac", "Isidro", "Mohammed", "Moises",
    "Juan Ramon", "Pau", "Juan Pedro", "Bernardo", "Abel", "Ahmed", "Ernesto", "Gerardo",
    "Pascual", "Christian", "Carmelo", "Manuel Jesus", "Sergi", "Mikel", "Federico",
    "Iñigo", "Aaron", "Marcelino", "Bartolome", "Miquel", "Antonio Manuel", "Asier",
    "Francesc", "Israel", "Joel", "Fermin", "Eloy", "Jose Alberto", "Jesus Manuel",
    "Aurelio", "Luis Alberto", "Jon", "Eric", "Benjamin", "Juan Jesus", "Pere", "Jonatan",
    "Gerard", "Mateo", "Omar", "Eusebio", "Lluis", "Oriol", "Josep Maria", "Antoni",
    "Jacinto", "Iñaki", "Unai", "Victoriano", "Pedro Antonio", "Carlos Alberto", "Carles",
    "Elias", "Jose Enrique", "Jeronimo", "Marco Antonio", "Angel Luis", "Pol", "Juan Pablo",
    "Teodoro", "Matias", "Isidoro", "Dionisio", "Juan Ignacio", "Dario", "Arnau", "Roger",
    "Candido", "Florencio", "Kevin", "Justo", "Blas", "Francisco Jesus", "Roman", "Gustavo",
    "Santos",
];

/// Female given names, most frequent first
pub const FEMALE_GIVEN_NAMES: &[&str] = &[
    "Maria Carmen", "Maria", "Carmen", "Josefa", "Isabel", "Ana Maria", "Maria Dolores",
    "Maria Pilar", "Maria Teresa", "Ana", "Francisca", "Laura", "Antonia", "Dolores",
    "Maria Angeles", "Cristina", "Marta", "Maria Jose", "Maria Isabel", "Pilar",
    "Maria Luisa", "Concepcion", "Lucia", "Mercedes", "Manuela", "Elena", "Rosa Maria",
    "Raquel", "Maria Jesus", "Sara", "Juana", "Teresa", "Rosario", "Paula", "Encarnacion",
    "Beatriz", "Rosa", "Nuria", "Silvia", "Montserrat", "Patricia", "Julia", "Monica",
    "Irene", "Margarita", "Andrea", "Maria Mar", "Angela", "Rocio", "Sonia", "Susana",
    "Sandra", "Alicia", "Maria Josefa", "Yolanda", "Marina", "Alba", "Natalia",
    "Maria Rosario", "Inmaculada", "Angeles", "Esther", "Maria Mercedes", "Ana Isabel",
    "Eva", "Amparo", "Veronica", "Noelia", "Maria Rosa", "Maria Victoria",
    "Maria Concepcion", "Consuelo", "Catalina", "Carolina", "Eva Maria", "Victoria",
    "Maria Antonia", "Lorena", "Ana Belen", "Maria Elena", "Claudia", "Emilia", "Luisa",
    "Miriam", "Ines", "Nerea", "Maria Nieves", "Gloria", "Lidia", "Aurora", "Josefina",
    "Esperanza", "Milagros", "Olga", "Carla", "Purificacion", "Maria Soledad", "Sofia",
    "Celia", "Maria Cristina", "Maria Luz", "Virginia", "Lourdes", "Fatima", "Vanesa",
    "Magdalena", "Vicenta", "Begoña", "Asuncion", "Clara", "Anna", "Matilde", "Alejandra",
    "Remedios", "Elisa", "Isabel Maria", "Estefania", "Maria Belen", "Trinidad", "Araceli",
    "Maria Asuncion", "Elvira", "Maria Paz", "Natividad", "Soledad", "Maria Begoña",
    "Ainhoa", "Felisa", "Belen", "Gema", "Maria Esther", "Maria Lourdes", "Ascension",
    "Blanca", "Vanessa", "Tamara", "Nieves", "Maria Cruz", "Rafaela", "Gemma", "Paloma",
    "Adela", "Almudena", "Rebeca", "Daniela", "Ramona", "Amalia", "Maria Amparo",
    "Maria Inmaculada", "Amelia", "Noemi", "Maria Eugenia", "Adriana", "Mireia", "Joaquina",
    "Tania", "Jessica", "Juana Maria", "Petra", "Leonor", "Juliana", "Carmen Maria",
    "Maria Rocio", "Guadalupe", "Agustina", "Mariana", "Laia", "Diana", "Barbara",
    "Rosalia", "Martina", "Cecilia", "Leticia", "Adoracion", "Elisabet",
    "Maria Encarnacion", "Maria Magdalena", "Maria Francisca", "Jennifer", "Estrella",
    "Judith", "Ester", "Ariadna", "Carlota", "Sheila", "Eugenia", "Judit", "Maria Gloria",
    "Maria Milagros", "Maria Consuelo", "Valentina", "Herminia", "Eulalia", "Ruth",
    "Soraya", "Enriqueta", "Maria Montserrat", "Lara", "Maria Yolanda", "Leire",
];

/// Surnames, most frequent first. A few entries are multi-word ("De La Fuente").
pub const SURNAMES: &[&str] = &[
    "Garcia", "Gonzalez", "Rodriguez", "Fernandez", "Lopez", "Martinez", "Sanchez", "Perez",
    "Gomez", "Martin", "Jimenez", "Ruiz", "Hernandez", "Diaz", "Moreno", "Alvarez", "Muñoz",
    "Romero", "Alonso", "Gutierrez", "Navarro", "Torres", "Dominguez", "Vazquez", "Ramos",
    "Gil", "Ramirez", "Serrano", "Blanco", "Suarez", "Molina", "Morales", "Ortega",
    "Delgado", "Castro", "Ortiz", "Rubio", "Marin", "Sanz", "Iglesias", "Nuñez", "Medina",
    "Garrido", "Santos", "Castillo", "Cortes", "Lozano", "Guerrero", "Cano", "Prieto",
    "Mendez", "Calvo", "Gallego", "Vidal", "Cruz", "Leon", "Herrera", "Marquez", "Peña",
    "Cabrera", "Flores", "Campos", "Vega", "Diez", "Fuentes", "Carrasco", "Caballero",
    "Nieto", "Aguilar", "Pascual", "Reyes", "Herrero", "Santana", "Lorenzo", "Hidalgo",
    "Montero", "Ibañez", "Gimenez", "Ferrer", "Duran", "Vicente", "Benitez", "Mora",
    "Arias", "Santiago", "Vargas", "Carmona", "Crespo", "Pastor", "Roman", "Soto", "Saez",
    "Velasco", "Soler", "Moya", "Esteban", "Parra", "Bravo", "Gallardo", "Rojas", "Pardo",
    "Merino", "Franco", "Izquierdo", "Espinosa", "Lara", "Rivas", "Silva", "Casado",
    "Rivera", "Redondo", "Arroyo", "Rey", "Camacho", "Vera", "Otero", "Galan", "Luque",
    "Montes", "Rios", "Sierra", "Segura", "Carrillo", "Marcos", "Marti", "Soriano",
    "Mendoza", "Robles", "Bernal", "Vila", "Valero", "Palacios", "Exposito", "Pereira",
    "Benito", "Andres", "Varela", "Guerra", "Macias", "Bueno", "Heredia", "Roldan", "Mateo",
    "Villar", "Contreras", "Miranda", "Guillen", "Mateos", "Escudero", "Menendez",
    "Aguilera", "Casas", "Aparicio", "Rivero", "Estevez", "Beltran", "Padilla", "Gracia",
    "Rico", "Calderon", "Abad", "Galvez", "Conde", "Salas", "Quintana", "Jurado", "Plaza",
    "Acosta", "Aranda", "Blazquez", "Roca", "Costa", "Bermudez", "Miguel", "Santamaria",
    "Salazar", "Serra", "Guzman", "Villanueva", "Cuesta", "Manzano", "Tomas", "Hurtado",
    "Rueda", "Trujillo", "Simon", "Pacheco", "Avila", "Pons", "De La Fuente", "Lazaro",
    "Sancho", "Mesa", "Del Rio", "Escobar", "Blasco", "Millan", "Alarcon", "Luna",
    "Castaño", "Zamora", "Salvador", "Bermejo", "Paredes", "Anton", "Ballesteros",
    "Valverde", "Maldonado", "Valle", "Bautista", "Ponce", "Rodrigo", "Lorente", "Juan",
    "Oliva", "Mas", "Cordero", "Collado", "Pozo", "Murillo", "Cuenca", "De La Cruz",
    "Montoya", "Martos", "Cuevas", "Marco", "Barroso", "Ros", "Quesada", "De La Torre",
    "Barrera", "Ordoñez", "Gimeno", "Corral", "Alba", "Puig", "Cabello", "Rojo", "Saiz",
    "Pulido", "Navas", "Aguado", "Soria", "Arenas", "Domingo", "Galindo", "Escribano",
    "Vallejo", "Mena", "Asensio", "Ramon", "Valencia", "Lucas", "Caro", "Polo", "Aguirre",
    "Naranjo", "Mata", "Villalba", "Paz", "Reina", "Moran", "Linares", "Amador", "Ojeda",
    "Leal", "Burgos", "Oliver", "Carretero", "Bonilla", "Sosa", "Roig", "Aragon", "Carrion",
    "Clemente", "Chen", "Villa", "Castellano", "Carrera", "Hernando", "Rosa", "Andreu",
    "Cordoba", "Caceres", "Ferreira", "Calero", "Correa", "Cobo", "Cardenas", "Juarez",
    "Domenech", "Alcaraz", "Velazquez", "Riera", "Sola", "Mohamed", "Chacon", "Llorente",
    "Saavedra", "Zapata", "Toledo", "Moral", "Vela", "Salgado", "Carbonell", "Arribas",
    "Villegas", "Prado", "Alfonso", "Pelaez", "Requena", "Sevilla", "Font", "Ayala", "Luis",
    "Carballo", "Piñeiro", "Olivares", "Da Silva", "Barrios", "Marques", "Esteve", "Solis",
    "Pinto", "Grau", "Salinas", "Quintero", "Bosch", "Camara", "Perea", "Cid", "Pineda",
    "Marrero", "Ballester", "Castilla", "Cantero", "Sanchis", "Palomo", "Arevalo",
    "De La Rosa", "Sala", "Casanova", "Miralles", "Rincon", "Lago", "Nicolas", "Baena",
    "Herranz", "Belmonte", "Porras", "Arranz", "Cardona", "Recio", "Muñiz", "Pino", "Palma",
    "Barba", "Coll", "Ventura", "Barreiro", "Cobos", "Cabezas", "Cuadrado", "Cervera",
    "Angulo", "Velez", "Puente", "Madrid", "Vaquero", "Becerra", "Ochoa", "Pujol", "Ocaña",
    "Navarrete", "Tapia", "Granados", "Valls", "Bello", "Alfaro", "Vergara", "Singh",
    "Latorre", "Losada", "Mejias", "Rovira", "Campo", "Peralta", "Gamez", "Sastre", "Egea",
    "Corrales", "Castellanos", "Falcon", "Catalan", "Barragan", "Fraile", "Alcantara",
    "Cebrian", "Estrada", "Godoy",
];

/// Which of the three tables an entry comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TableKind {
    Male,
    Female,
    Surnames,
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TableKind::Male => "male given names",
            TableKind::Female => "female given names",
            TableKind::Surnames => "surnames",
        };
        f.write_str(label)
    }
}

/// Custom tables as read from JSON, before validation
#[derive(Debug, Deserialize)]
struct RawTables {
    male: Vec<String>,
    female: Vec<String>,
    surnames: Vec<String>,
}

/// The three tables a generator draws from.
///
/// Every table is non-empty and every entry is non-blank; the constructors
/// enforce it. Duplicates are kept, they only skew the odds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordTables {
    male: Vec<String>,
    female: Vec<String>,
    surnames: Vec<String>,
    #[serde(skip)]
    has_unspaced_surname: bool,
}

impl WordTables {
    pub fn new(male: Vec<String>, female: Vec<String>, surnames: Vec<String>) -> Result<Self> {
        validate(TableKind::Male, &male)?;
        validate(TableKind::Female, &female)?;
        validate(TableKind::Surnames, &surnames)?;

        let has_unspaced_surname = surnames.iter().any(|s| !is_spaced(s));
        Ok(Self {
            male,
            female,
            surnames,
            has_unspaced_surname,
        })
    }

    /// The embedded tables
    pub fn builtin() -> Self {
        let owned = |table: &[&str]| -> Vec<String> { table.iter().map(|s| s.to_string()).collect() };
        Self {
            male: owned(MALE_GIVEN_NAMES),
            female: owned(FEMALE_GIVEN_NAMES),
            surnames: owned(SURNAMES),
            has_unspaced_surname: true,
        }
    }

    /// Parse `{"male": [..], "female": [..], "surnames": [..]}` and validate it
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: RawTables = serde_json::from_str(json)?;
        Self::new(raw.male, raw.female, raw.surnames)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| GeneratorError::io(path, e))?;
        Self::from_json(&json)
    }

    pub fn get(&self, kind: TableKind) -> &[String] {
        match kind {
            TableKind::Male => &self.male,
            TableKind::Female => &self.female,
            TableKind::Surnames => &self.surnames,
        }
    }

    /// False when every surname is multi-word, so rejecting spaced surnames
    /// could never terminate.
    pub fn has_unspaced_surname(&self) -> bool {
        self.has_unspaced_surname
    }
}

impl Default for WordTables {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Multi-word entry ("De La Fuente")
pub fn is_spaced(entry: &str) -> bool {
    entry.contains(' ')
}

fn validate(table: TableKind, entries: &[String]) -> Result<()> {
    if entries.is_empty() {
        return Err(GeneratorError::EmptyTable { table });
    }
    match entries.iter().position(|e| e.trim().is_empty()) {
        Some(index) => Err(GeneratorError::EmptyEntry { table, index }),
        None => Ok(()),
    }
}
