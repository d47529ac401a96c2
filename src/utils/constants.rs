/// Id del `<script>` de Google Maps; evita inyectarlo dos veces
pub const GOOGLE_MAP_SCRIPT_ID: &str = "google-map-script";

/// Id del contenedor DOM del mapa
pub const MAP_CONTAINER_ID: &str = "waste-map";
